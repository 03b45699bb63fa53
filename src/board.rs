// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, matrix};

// 0 is an empty square. A blank played as a letter keeps the 0x80 flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim: matrix::Dim,
    tiles: Box<[u8]>,
}

impl Board {
    pub fn new(dim: matrix::Dim) -> Self {
        Self {
            dim,
            tiles: vec![0u8; dim.num_cells()].into_boxed_slice(),
        }
    }

    // '.' or ' ' is empty, lowercase is a blanked letter.
    pub fn from_rows<S: AsRef<str>>(
        alphabet: &alphabet::Alphabet,
        dim: matrix::Dim,
        rows: &[S],
    ) -> error::Returns<Self> {
        if rows.len() != dim.rows as usize {
            return_error!(format!(
                "expected {} rows, found {}",
                dim.rows,
                rows.len()
            ));
        }
        let mut board = Self::new(dim);
        for (r, row) in (0i8..).zip(rows.iter()) {
            let row = row.as_ref();
            if row.chars().count() != dim.cols as usize {
                return_error!(format!("row {} must have {} squares", r, dim.cols));
            }
            for (c, ch) in (0i8..).zip(row.chars()) {
                board.tiles[dim.at_row_col(r, c)] = match ch {
                    '.' | ' ' => 0,
                    _ => match alphabet.board_tile(ch) {
                        Some(tile) => tile,
                        None => {
                            return_error!(format!("invalid square {:?} in row {}", ch, r));
                        }
                    },
                };
            }
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    // caller bounds-checks.
    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> u8 {
        self.tiles[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn has_tile(&self, row: i8, col: i8) -> bool {
        self.dim.contains(row, col) && self.at(row, col) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|&tile| tile == 0)
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile != 0).count()
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, idx: usize, tile: u8) {
        self.tiles[idx] = tile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim() -> matrix::Dim {
        matrix::Dim { rows: 3, cols: 4 }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(dim());
        assert!(board.is_empty());
        assert_eq!(board.num_tiles(), 0);
        assert_eq!(board.at(2, 3), 0);
    }

    #[test]
    fn parses_rows() {
        let board =
            Board::from_rows(&alphabet::ENGLISH_ALPHABET, dim(), &["....", ".Ab.", "...."]).unwrap();
        assert!(!board.is_empty());
        assert_eq!(board.at(1, 1), 1);
        assert_eq!(board.at(1, 2), 2 | 0x80);
        assert!(board.has_tile(1, 2));
        assert!(!board.has_tile(1, 4));
        assert!(!board.has_tile(-1, 0));
        assert_eq!(board.num_tiles(), 2);
    }

    #[test]
    fn rejects_malformed_rows() {
        let alphabet = &alphabet::ENGLISH_ALPHABET;
        assert!(Board::from_rows(alphabet, dim(), &["....", "...."]).is_err());
        assert!(Board::from_rows(alphabet, dim(), &["....", "...", "...."]).is_err());
        assert!(Board::from_rows(alphabet, dim(), &["....", ".1..", "...."]).is_err());
    }
}
