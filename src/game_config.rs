// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatKind {
    Human,
    Bot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    SinglePlayer,
    SingleBot,
    Pvp,
    Pvb,
    Bvb,
}

impl GameMode {
    pub fn seats(&self) -> &'static [SeatKind] {
        match self {
            GameMode::SinglePlayer => &[SeatKind::Human],
            GameMode::SingleBot => &[SeatKind::Bot],
            GameMode::Pvp => &[SeatKind::Human, SeatKind::Human],
            GameMode::Pvb => &[SeatKind::Human, SeatKind::Bot],
            GameMode::Bvb => &[SeatKind::Bot, SeatKind::Bot],
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_player" => Ok(GameMode::SinglePlayer),
            "single_bot" => Ok(GameMode::SingleBot),
            "pvp" => Ok(GameMode::Pvp),
            "pvb" => Ok(GameMode::Pvb),
            "bvb" => Ok(GameMode::Bvb),
            _ => Err(format!(
                "unknown mode {:?} (single_player, single_bot, pvp, pvb, bvb)",
                s
            )),
        }
    }
}

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    bingo_bonus: i16,
    seats: Box<[SeatKind]>,
    num_zeros_to_end: u8,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &'a alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn seats(&self) -> &[SeatKind] {
        match self {
            GameConfig::Static(x) => &x.seats,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        self.seats().len() as u8
    }

    // consecutive scoreless turns (passes) that end the game.
    #[inline(always)]
    pub fn num_zeros_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_zeros_to_end,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_played == x.rack_size {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }
}

pub fn make_english_game_config<'a>(game_mode: GameMode) -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        bingo_bonus: 50,
        seats: game_mode.seats().into(),
        num_zeros_to_end: 6,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_resolve_to_seats() {
        assert_eq!(
            "pvb".parse::<GameMode>().unwrap().seats(),
            [SeatKind::Human, SeatKind::Bot]
        );
        assert_eq!("single_bot".parse::<GameMode>(), Ok(GameMode::SingleBot));
        assert!("PVB".parse::<GameMode>().is_err());
        let game_config = make_english_game_config(GameMode::Bvb);
        assert_eq!(game_config.num_players(), 2);
        assert_eq!(game_config.seats(), [SeatKind::Bot, SeatKind::Bot]);
    }

    #[test]
    fn bingo_only_for_full_rack() {
        let game_config = make_english_game_config(GameMode::Pvp);
        assert_eq!(game_config.num_played_bonus(7), 50);
        assert_eq!(game_config.num_played_bonus(6), 0);
        assert_eq!(game_config.num_played_bonus(1), 0);
    }

    #[test]
    fn mode_names_round_trip_through_serde() {
        assert_eq!(
            serde_json::to_string(&GameMode::SinglePlayer).unwrap(),
            "\"single_player\""
        );
        assert_eq!(
            serde_json::from_str::<SeatKind>("\"bot\"").unwrap(),
            SeatKind::Bot
        );
    }
}
