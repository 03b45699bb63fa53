// Copyright (C) 2020-2026 Andy Kurnia.

// A lane is one row (across) or one column (down) of the board.
#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: i8) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn striders_walk_rows_and_columns() {
        let dim = Dim { rows: 15, cols: 15 };
        assert_eq!(dim.across(7).at(6), dim.at_row_col(7, 6));
        assert_eq!(dim.down(7).at(8), dim.at_row_col(8, 7));
        assert_eq!(dim.lane(true, 3).len(), 15);
        assert!(dim.contains(14, 0));
        assert!(!dim.contains(15, 0));
        assert!(!dim.contains(0, -1));
        assert_eq!(dim.num_cells(), 225);
    }
}
