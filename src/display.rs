// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, board_layout, placement};

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    match board_layout.premium_at(row, col).class() {
        board_layout::PremiumClass::TripleWord => "=",
        board_layout::PremiumClass::DoubleWord => "-",
        board_layout::PremiumClass::TripleLetter => "\"",
        board_layout::PremiumClass::DoubleLetter => "'",
        board_layout::PremiumClass::None => " ",
    }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &board_layout::BoardLayout,
    board: &board::Board,
    row: i8,
    col: i8,
) -> &'a str {
    alphabet
        .from_board(board.at(row, col))
        .unwrap_or_else(|| empty_label(board_layout, row, col))
}

// columns and rows are numbered from 0, the same way moves are entered.
pub fn board_to_string(
    alphabet: &alphabet::Alphabet,
    board_layout: &board_layout::BoardLayout,
    board: &board::Board,
) -> String {
    use std::fmt::Write;
    let dim = board.dim();
    let mut s = String::new();
    let header = |s: &mut String| {
        s.push_str("   ");
        for c in 0..dim.cols {
            let _ = write!(s, "{:2}", c);
        }
        s.push('\n');
    };
    let rule = |s: &mut String| {
        s.push_str("  +");
        for _ in 1..dim.cols {
            s.push_str("--");
        }
        s.push_str("-+\n");
    };
    header(&mut s);
    rule(&mut s);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push_str(board_label(alphabet, board_layout, board, r, c));
        }
        let _ = writeln!(s, "|{}", r);
    }
    rule(&mut s);
    header(&mut s);
    s
}

pub fn print_board(
    alphabet: &alphabet::Alphabet,
    board_layout: &board_layout::BoardLayout,
    board: &board::Board,
) {
    print!("{}", board_to_string(alphabet, board_layout, board));
}

// "7 6 h CAT", with tiles already on the board in parentheses: "7 7 v (A)T".
pub fn fmt_placement(
    alphabet: &alphabet::Alphabet,
    board: &board::Board,
    placement: &placement::Placement,
) -> String {
    let strider = board.dim().lane(placement.down, placement.lane);
    let mut s = format!(
        "{} {} {} ",
        placement.row(),
        placement.col(),
        if placement.down { "v" } else { "h" }
    );
    let mut inside = false;
    for (i, &tile) in (placement.idx..).zip(placement.word.iter()) {
        if tile == 0 {
            if !inside {
                s.push('(');
                inside = true;
            }
            s.push_str(alphabet.from_board(board.tiles()[strider.at(i)]).unwrap_or("?"));
        } else {
            if inside {
                s.push(')');
                inside = false;
            }
            s.push_str(alphabet.from_board(tile).unwrap_or("?"));
        }
    }
    if inside {
        s.push(')');
    }
    s
}
