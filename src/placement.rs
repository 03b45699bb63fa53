// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_config};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    #[inline(always)]
    pub fn is_down(self) -> bool {
        self == Direction::Vertical
    }

    #[inline(always)]
    pub fn from_down(down: bool) -> Self {
        if down {
            Direction::Vertical
        } else {
            Direction::Horizontal
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "horizontal" | "across" => Ok(Direction::Horizontal),
            "v" | "vertical" | "down" => Ok(Direction::Vertical),
            _ => Err(format!("unknown direction {:?}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("word must be at least 2 letters")]
    TooShort,
    #[error("word contains a tile that is not a letter")]
    InvalidTile,
    #[error("word does not fit on the board")]
    OutOfBounds,
    #[error("word conflicts with the tile at row {row}, col {col}")]
    Conflict { row: i8, col: i8 },
    #[error("rack cannot cover row {row}, col {col}")]
    RackInsufficient { row: i8, col: i8 },
    #[error("word does not place any new tile")]
    NoTilesPlaced,
    #[error("first word must cover the center square")]
    MissesCenter,
    #[error("word does not touch any tile on the board")]
    Disconnected,
}

// One entry per square of the word: 0 if the tile was already on the board,
// otherwise the tile placed from the rack (0x80 set if a blank covered it).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub down: bool,
    pub lane: i8,
    pub idx: i8,
    pub word: Box<[u8]>,
}

impl Placement {
    #[inline(always)]
    pub fn direction(&self) -> Direction {
        Direction::from_down(self.down)
    }

    #[inline(always)]
    pub fn row(&self) -> i8 {
        if self.down { self.idx } else { self.lane }
    }

    #[inline(always)]
    pub fn col(&self) -> i8 {
        if self.down { self.lane } else { self.idx }
    }

    pub fn newly_placed(&self) -> impl Iterator<Item = u8> + '_ {
        self.word.iter().copied().filter(|&tile| tile != 0)
    }

    pub fn num_played(&self) -> i8 {
        self.newly_placed().count() as i8
    }

    // the full word as it reads on the board after this placement.
    pub fn board_word(&self, board: &board::Board) -> Box<[u8]> {
        let strider = board.dim().lane(self.down, self.lane);
        (self.idx..)
            .zip(self.word.iter())
            .map(|(i, &tile)| {
                if tile != 0 {
                    tile
                } else {
                    board.tiles()[strider.at(i)]
                }
            })
            .collect()
    }
}

// Pure. Rack tiles are spent from a scratch copy: the exact letter if there
// is one, else a blank.
pub fn validate(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    word: &[u8],
    row: i8,
    col: i8,
    direction: Direction,
    rack: &[u8],
) -> Result<Placement, PlacementError> {
    let len = word.len();
    if len < 2 {
        return Err(PlacementError::TooShort);
    }
    let num_letters = game_config.alphabet().len();
    if word.iter().any(|&tile| tile == 0 || tile >= num_letters) {
        return Err(PlacementError::InvalidTile);
    }
    let dim = board.dim();
    let down = direction.is_down();
    let (lane, idx, lane_len) = if down {
        (col, row, dim.rows)
    } else {
        (row, col, dim.cols)
    };
    if !dim.contains(row, col) || (idx as usize) + len > lane_len as usize {
        return Err(PlacementError::OutOfBounds);
    }

    let strider = dim.lane(down, lane);
    let mut scratch_rack = rack.to_vec();
    let mut placed = vec![0u8; len];
    let mut touches = false;
    for (i, &letter) in (idx..).zip(word.iter()) {
        let (r, c) = if down { (i, lane) } else { (lane, i) };
        let b = board.tiles()[strider.at(i)];
        if b != 0 {
            if b & 0x7f != letter {
                return Err(PlacementError::Conflict { row: r, col: c });
            }
            touches = true;
            continue;
        }
        let tile = match scratch_rack.iter().position(|&t| t == letter) {
            Some(pos) => {
                scratch_rack.remove(pos);
                letter
            }
            None => match scratch_rack.iter().position(|&t| t == 0) {
                Some(pos) => {
                    scratch_rack.remove(pos);
                    letter | 0x80
                }
                None => return Err(PlacementError::RackInsufficient { row: r, col: c }),
            },
        };
        placed[(i - idx) as usize] = tile;
        touches = touches
            || board.has_tile(r - 1, c)
            || board.has_tile(r + 1, c)
            || board.has_tile(r, c - 1)
            || board.has_tile(r, c + 1);
    }

    let placement = Placement {
        down,
        lane,
        idx,
        word: placed.into_boxed_slice(),
    };
    // Not among the usual placement rules: a word made only of tiles
    // already on the board is refused.
    if placement.num_played() == 0 {
        return Err(PlacementError::NoTilesPlaced);
    }
    if board.is_empty() {
        let board_layout = game_config.board_layout();
        let (star_lane, star_idx) = if down {
            (board_layout.star_col(), board_layout.star_row())
        } else {
            (board_layout.star_row(), board_layout.star_col())
        };
        if lane != star_lane || idx > star_idx || (idx as usize) + len <= star_idx as usize {
            return Err(PlacementError::MissesCenter);
        }
    } else if !touches {
        return Err(PlacementError::Disconnected);
    }
    Ok(placement)
}
