// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_config, placement};

// Assume placement is valid. Only the main word is scored.
// Squares already covered on the board count at face value without premiums,
// so rescoring a committed placement never reapplies a multiplier.
pub fn compute_score(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    placement: &placement::Placement,
) -> i16 {
    let alphabet = game_config.alphabet();
    let premiums = game_config.board_layout().premiums();
    let strider = board.dim().lane(placement.down, placement.lane);
    let mut num_played = 0;
    let mut word_multiplier = 1;
    let mut word_score = 0i16;
    for (i, &tile) in (placement.idx..).zip(placement.word.iter()) {
        let strider_at_i = strider.at(i);
        let b = board.tiles()[strider_at_i];
        let tile_score = if b != 0 {
            alphabet.score(b) as i16
        } else {
            num_played += 1;
            let premium = premiums[strider_at_i];
            word_multiplier *= premium.word_multiplier as i16;
            alphabet.score(tile) as i16 * premium.tile_multiplier as i16
        };
        word_score += tile_score;
    }
    word_score * word_multiplier + game_config.num_played_bonus(num_played)
}

#[cfg(test)]
mod tests {
    use super::super::{alphabet, game_config, placement::Direction};
    use super::*;

    fn config() -> game_config::GameConfig<'static> {
        game_config::make_english_game_config(game_config::GameMode::Pvp)
    }

    fn tiles(s: &str) -> Vec<u8> {
        alphabet::ENGLISH_ALPHABET.parse_rack(s).unwrap()
    }

    fn place(
        game_config: &game_config::GameConfig,
        board: &board::Board,
        word: &str,
        row: i8,
        col: i8,
        direction: Direction,
        rack: &str,
    ) -> placement::Placement {
        placement::validate(game_config, board, &tiles(word), row, col, direction, &tiles(rack))
            .unwrap()
    }

    // commits the placement without touching racks.
    fn put(board: &mut board::Board, placement: &placement::Placement) {
        let strider = board.dim().lane(placement.down, placement.lane);
        for (i, &tile) in (placement.idx..).zip(placement.word.iter()) {
            if tile != 0 {
                board.set(strider.at(i), tile);
            }
        }
    }

    #[test]
    fn center_doubles_the_first_word() {
        let game_config = config();
        let board = board::Board::new(game_config.board_layout().dim());
        let p = place(&game_config, &board, "CAT", 7, 6, Direction::Horizontal, "CATQQQQ");
        assert_eq!(compute_score(&game_config, &board, &p), (3 + 1 + 1) * 2);
    }

    #[test]
    fn letter_and_word_premiums_stack() {
        let game_config = config();
        let mut board = board::Board::new(game_config.board_layout().dim());
        let first = place(&game_config, &board, "QI", 7, 7, Direction::Vertical, "QI");
        assert_eq!(compute_score(&game_config, &board, &first), (10 + 1) * 2);
        put(&mut board, &first);
        // row 8: (8,6) DLS, (8,7) is the I, (8,8) DLS
        let p = place(&game_config, &board, "ZIT", 8, 6, Direction::Horizontal, "ZT");
        assert_eq!(compute_score(&game_config, &board, &p), 10 * 2 + 1 + 1 * 2);
        // row 7 cols 0..=7 through the Q: col 0 TWS, col 3 DLS
        let p = place(&game_config, &board, "AAAAAAAQ", 7, 0, Direction::Horizontal, "AAAAAAA");
        assert_eq!(
            compute_score(&game_config, &board, &p),
            (1 + 1 + 1 + 2 + 1 + 1 + 1 + 10) * 3 + 50
        );
    }

    #[test]
    fn blanked_letters_score_face_value() {
        let game_config = config();
        let mut board = board::Board::new(game_config.board_layout().dim());
        let p = place(&game_config, &board, "QI", 7, 7, Direction::Horizontal, "_I");
        assert_eq!(p.word[0], 17 | 0x80);
        assert_eq!(compute_score(&game_config, &board, &p), (10 + 1) * 2);
        put(&mut board, &p);
        // the blanked Q already on the board, S on a plain square.
        let p = place(&game_config, &board, "QIS", 7, 7, Direction::Horizontal, "S");
        assert_eq!(compute_score(&game_config, &board, &p), 10 + 1 + 1);
    }

    #[test]
    fn rescoring_after_commit_has_no_premiums() {
        let game_config = config();
        let mut board = board::Board::new(game_config.board_layout().dim());
        let p = place(&game_config, &board, "CAT", 7, 6, Direction::Horizontal, "CAT");
        assert_eq!(compute_score(&game_config, &board, &p), 10);
        put(&mut board, &p);
        assert_eq!(compute_score(&game_config, &board, &p), 3 + 1 + 1);
    }

    #[test]
    fn full_rack_earns_bingo() {
        let game_config = config();
        let board = board::Board::new(game_config.board_layout().dim());
        // (7,1)..(7,7): col 3 DLS, col 7 DWS
        let p = place(&game_config, &board, "ABCDEFG", 7, 1, Direction::Horizontal, "ABCDEFG");
        assert_eq!(p.num_played(), 7);
        let base = (1 + 3 + 3 * 2 + 2 + 1 + 4 + 2) * 2;
        assert_eq!(compute_score(&game_config, &board, &p), base + 50);
        let p = place(&game_config, &board, "ABCDEF", 7, 2, Direction::Horizontal, "ABCDEFG");
        assert_eq!(compute_score(&game_config, &board, &p), (1 + 3 * 2 + 3 + 2 + 1 + 4) * 2);
    }
}
