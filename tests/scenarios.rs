// Copyright (C) 2020-2026 Andy Kurnia.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wordgrid::{
    alphabet, board, game_config, game_state, lexicon, move_picker, placement, play_scorer,
};

fn config(game_mode: game_config::GameMode) -> game_config::GameConfig<'static> {
    game_config::make_english_game_config(game_mode)
}

fn lexicon() -> lexicon::Lexicon<'static> {
    lexicon::Lexicon::from_text(
        &alphabet::ENGLISH_ALPHABET,
        "at\ncat\ncats\ncoat\ncoats\ncod\ncog\ndog\ndogs\ndot\ngoat\ngoats\nscat\ntag\ntoad\ntoga\n",
    )
    .unwrap()
}

fn tiles(s: &str) -> Vec<u8> {
    alphabet::ENGLISH_ALPHABET.parse_rack(s).unwrap()
}

fn board_from(cells: &[(usize, usize, char)]) -> board::Board {
    let mut rows = vec![vec!['.'; 15]; 15];
    for &(r, c, ch) in cells {
        rows[r][c] = ch;
    }
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>();
    board::Board::from_rows(
        &alphabet::ENGLISH_ALPHABET,
        config(game_config::GameMode::Pvp).board_layout().dim(),
        &rows,
    )
    .unwrap()
}

#[test]
fn cat_through_center_scores_ten() {
    let game_config = config(game_config::GameMode::Pvp);
    let board = board_from(&[]);
    let rack = tiles("CATXYZQ");
    let p = placement::validate(
        &game_config,
        &board,
        &tiles("CAT"),
        7,
        6,
        placement::Direction::Horizontal,
        &rack,
    )
    .unwrap();
    assert_eq!(p.num_played(), 3);
    assert_eq!(play_scorer::compute_score(&game_config, &board, &p), 10);
}

#[test]
fn dog_needs_three_blanks() {
    let game_config = config(game_config::GameMode::Pvp);
    let board = board_from(&[]);
    let rack = tiles("CAT__");
    assert_eq!(
        placement::validate(
            &game_config,
            &board,
            &tiles("DOG"),
            7,
            7,
            placement::Direction::Horizontal,
            &rack,
        ),
        Err(placement::PlacementError::RackInsufficient { row: 7, col: 9 })
    );
    let rack = tiles("CAT___");
    assert!(
        placement::validate(
            &game_config,
            &board,
            &tiles("DOG"),
            7,
            7,
            placement::Direction::Horizontal,
            &rack,
        )
        .is_ok()
    );
}

#[test]
fn at_through_existing_a_places_only_t() {
    let game_config = config(game_config::GameMode::Pvp);
    let board = board_from(&[(7, 7, 'A')]);
    let p = placement::validate(
        &game_config,
        &board,
        &tiles("AT"),
        7,
        7,
        placement::Direction::Vertical,
        &tiles("T"),
    )
    .unwrap();
    assert_eq!(p.newly_placed().collect::<Vec<_>>(), tiles("T"));
    // A is on the board already, T sits on a plain square.
    assert_eq!(play_scorer::compute_score(&game_config, &board, &p), 2);
}

#[test]
fn search_is_deterministic_and_covers_center() {
    let game_config = config(game_config::GameMode::Bvb);
    let lexicon = lexicon();
    let board = board_from(&[]);
    let rack = tiles("CATDOGS");
    let first = move_picker::find_best_move(&game_config, &board, &rack, &lexicon).unwrap();
    let again = move_picker::find_best_move(&game_config, &board, &rack, &lexicon).unwrap();
    assert_eq!(first, again);
    assert!(lexicon.contains_tiles(&first.word));
    let p = &first.placement;
    let (row, col) = (p.row(), p.col());
    let len = p.word.len() as i8;
    assert!(if p.down {
        col == 7 && row <= 7 && 7 < row + len
    } else {
        row == 7 && col <= 7 && 7 < col + len
    });
}

#[test]
fn turns_conserve_tiles_and_reject_without_change() {
    let game_config = config(game_config::GameMode::Pvp);
    let lexicon = lexicon();
    let mut game_state =
        game_state::GameState::new(&game_config, &mut ChaCha20Rng::seed_from_u64(7));
    game_state.players[0].rack = tiles("CATDOGS");
    let bag_len = game_state.bag.len();

    let before = game_state.clone();
    assert_eq!(
        game_state
            .attempt_turn(&lexicon, "CAT", 0, 0, placement::Direction::Horizontal, 0)
            .err(),
        Some(game_state::Rejection::IllegalPlacement(
            placement::PlacementError::MissesCenter
        ))
    );
    assert_eq!(
        game_state
            .attempt_turn(&lexicon, "TCA", 7, 6, placement::Direction::Horizontal, 0)
            .err(),
        Some(game_state::Rejection::InvalidWord)
    );
    assert_eq!(
        game_state
            .attempt_turn(&lexicon, "CAT", 7, 6, placement::Direction::Horizontal, 1)
            .err(),
        Some(game_state::Rejection::NotYourTurn {
            expected: 0,
            actual: 1
        })
    );
    assert_eq!(game_state.players, before.players);
    assert_eq!(game_state.board, before.board);
    assert_eq!(game_state.bag, before.bag);

    let accepted = game_state
        .attempt_turn(&lexicon, "cat", 7, 6, placement::Direction::Horizontal, 0)
        .unwrap();
    assert_eq!(accepted.score, 10);
    let next = accepted.game_state;
    assert_eq!(next.players[0].rack.len(), 7 - 3 + accepted.drawn.len());
    assert_eq!(next.players[0].rack[..4], tiles("DOGS")[..]);
    assert_eq!(next.bag.len(), bag_len - 3);
    assert_eq!(next.turn, 1);
    assert_eq!(next.players[0].score, 10);

    // replaying the committed word through the same cells earns no premiums.
    let replay = placement::validate(
        &game_config,
        &next.board,
        &tiles("CATS"),
        7,
        6,
        placement::Direction::Horizontal,
        &tiles("S"),
    )
    .unwrap();
    assert_eq!(replay.num_played(), 1);
    assert_eq!(play_scorer::compute_score(&game_config, &next.board, &replay), 6);
}
