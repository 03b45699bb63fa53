// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_config, lexicon, placement, play_scorer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub word: Box<[u8]>,
    pub placement: placement::Placement,
    pub score: i16,
}

static DIRECTIONS: [placement::Direction; 2] =
    [placement::Direction::Horizontal, placement::Direction::Vertical];

// Tries every word the rack spells at every square in both directions and
// keeps the first placement with the strictly highest score. Ties therefore
// go to the earlier word, then row-major order, then horizontal.
pub fn find_best_move(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    rack: &[u8],
    lexicon: &lexicon::Lexicon,
) -> Option<Move> {
    let dim = board.dim();
    let words = lexicon.arrangements(rack);
    let mut best: Option<Move> = None;
    let mut num_legal = 0usize;
    for word in &words {
        for row in 0..dim.rows {
            for col in 0..dim.cols {
                for &direction in &DIRECTIONS {
                    let Ok(placement) =
                        placement::validate(game_config, board, word, row, col, direction, rack)
                    else {
                        continue;
                    };
                    num_legal += 1;
                    let score = play_scorer::compute_score(game_config, board, &placement);
                    if best.as_ref().is_none_or(|m| score > m.score) {
                        best = Some(Move {
                            word: word.clone(),
                            placement,
                            score,
                        });
                    }
                }
            }
        }
    }
    log::debug!(
        "{} words, {} legal placements, best {:?}",
        words.len(),
        num_legal,
        best.as_ref().map(|m| m.score)
    );
    best
}
