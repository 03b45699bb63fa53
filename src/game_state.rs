// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, error, game_config, lexicon, move_picker, placement, play_scorer};
use rand::prelude::*;

// Removes one rack tile per placed tile (the blank for a blanked letter),
// then appends the drawn tiles.
pub fn commit_rack<II: IntoIterator<Item = u8>>(
    rack: &[u8],
    placed_tiles: II,
    drawn_tiles: &[u8],
) -> error::Returns<Vec<u8>> {
    let mut new_rack = rack.to_vec();
    for tile in placed_tiles {
        let rack_tile = tile & !((tile as i8) >> 7) as u8;
        let pos = new_rack
            .iter()
            .position(|&t| t == rack_tile)
            .ok_or("placed tile is not on the rack")?;
        new_rack.remove(pos);
    }
    new_rack.extend_from_slice(drawn_tiles);
    Ok(new_rack)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamePlayer {
    pub seat_kind: game_config::SeatKind,
    pub score: i32,
    pub rack: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("not a valid word")]
    InvalidWord,
    #[error("illegal placement: {0}")]
    IllegalPlacement(#[from] placement::PlacementError),
    #[error("no such player {0}")]
    UnknownPlayer(usize),
    #[error("it is player {expected}'s turn, not player {actual}'s")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("the game is over")]
    GameOver,
    #[error("the rack does not hold the placed tiles")]
    RackMismatch,
}

pub struct Accepted<'a> {
    pub score: i16,
    pub placement: placement::Placement,
    pub drawn: Vec<u8>,
    // fewer tiles were drawn than placed.
    pub bag_exhausted: bool,
    pub game_state: GameState<'a>,
}

pub enum BotTurn<'a> {
    Played(Accepted<'a>),
    Passed(GameState<'a>),
}

// One game. Every accepted turn returns a new value, rejected turns leave
// the old one untouched.
#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    pub num_zeros: u8,
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig<'a>, rng: &mut dyn RngCore) -> Self {
        let rack_size = game_config.rack_size() as usize;
        let mut bag = bag::Bag::new(game_config.alphabet());
        bag.shuffle(rng);
        let players = game_config
            .seats()
            .iter()
            .map(|&seat_kind| {
                let mut rack = Vec::with_capacity(rack_size);
                bag.replenish(&mut rack, rack_size);
                GamePlayer {
                    seat_kind,
                    score: 0,
                    rack,
                }
            })
            .collect();
        Self {
            game_config,
            players,
            board: board::Board::new(game_config.board_layout().dim()),
            bag,
            turn: 0,
            num_zeros: 0,
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn is_over(&self) -> bool {
        self.num_zeros >= self.game_config.num_zeros_to_end()
            || (self.bag.is_empty() && self.players.iter().any(|player| player.rack.is_empty()))
    }

    fn check_turn(&self, player_idx: usize) -> Result<(), Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }
        if player_idx >= self.players.len() {
            return Err(Rejection::UnknownPlayer(player_idx));
        }
        if player_idx != self.turn as usize {
            return Err(Rejection::NotYourTurn {
                expected: self.turn as usize,
                actual: player_idx,
            });
        }
        Ok(())
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        if self.turn as usize >= self.players.len() {
            self.turn = 0;
        }
    }

    pub fn attempt_turn(
        &self,
        lexicon: &lexicon::Lexicon,
        word: &str,
        row: i8,
        col: i8,
        direction: placement::Direction,
        player_idx: usize,
    ) -> Result<Accepted<'a>, Rejection> {
        self.check_turn(player_idx)?;
        let word_tiles = match self.game_config.alphabet().word_tiles(word) {
            Some(tiles) if lexicon.contains_tiles(&tiles) => tiles,
            _ => {
                log::debug!("player {} tried invalid word {:?}", player_idx, word);
                return Err(Rejection::InvalidWord);
            }
        };
        let placement = placement::validate(
            self.game_config,
            &self.board,
            &word_tiles,
            row,
            col,
            direction,
            &self.current_player().rack,
        )
        .inspect_err(|err| {
            log::debug!(
                "player {} cannot place {:?} at {},{} {:?}: {}",
                player_idx,
                word,
                row,
                col,
                direction,
                err
            )
        })?;
        self.commit(placement)
    }

    // Assume placement is valid for the current player.
    fn commit(&self, placement: placement::Placement) -> Result<Accepted<'a>, Rejection> {
        let score = play_scorer::compute_score(self.game_config, &self.board, &placement);
        let mut game_state = self.clone();
        let strider = game_state.board.dim().lane(placement.down, placement.lane);
        for (i, &tile) in (placement.idx..).zip(placement.word.iter()) {
            if tile != 0 {
                game_state.board.set(strider.at(i), tile);
            }
        }
        let num_played = placement.num_played() as usize;
        let drawn = game_state.bag.draw(num_played);
        let bag_exhausted = drawn.len() < num_played;
        let player = &mut game_state.players[game_state.turn as usize];
        player.score += score as i32;
        player.rack = commit_rack(&player.rack, placement.newly_placed(), &drawn)
            .map_err(|_| Rejection::RackMismatch)?;
        log::debug!(
            "player {} scored {} placing {} tiles, drew {}",
            game_state.turn,
            score,
            num_played,
            drawn.len()
        );
        game_state.num_zeros = if score == 0 { game_state.num_zeros + 1 } else { 0 };
        game_state.next_turn();
        Ok(Accepted {
            score,
            placement,
            drawn,
            bag_exhausted,
            game_state,
        })
    }

    pub fn pass_turn(&self, player_idx: usize) -> Result<GameState<'a>, Rejection> {
        self.check_turn(player_idx)?;
        let mut game_state = self.clone();
        game_state.num_zeros += 1;
        game_state.next_turn();
        Ok(game_state)
    }

    // Plays the best move for the current player, or passes if there is none.
    pub fn play_bot_turn(&self, lexicon: &lexicon::Lexicon) -> Result<BotTurn<'a>, Rejection> {
        let player_idx = self.turn as usize;
        self.check_turn(player_idx)?;
        match move_picker::find_best_move(
            self.game_config,
            &self.board,
            &self.current_player().rack,
            lexicon,
        ) {
            Some(best) => Ok(BotTurn::Played(self.commit(best.placement)?)),
            None => {
                log::debug!("player {} has no legal move", player_idx);
                Ok(BotTurn::Passed(self.pass_turn(player_idx)?))
            }
        }
    }
}
