// Copyright (C) 2020-2026 Andy Kurnia.

// Tile numbering: 0 is the blank, 1..=26 are A..=Z.
// On the board, 0 is an empty square and a blank played as A is 0x81.

pub struct Tile<'a> {
    label: &'a str,
    blank_label: &'a str,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile<'a>],
    num_tiles: u16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> u16 {
        match self {
            Alphabet::Static(x) => x.num_tiles,
        }
    }

    #[inline(always)]
    pub fn from_board(&self, idx: u8) -> Option<&'a str> {
        let c = idx & 0x7f;
        if c == 0 || c >= self.len() {
            None
        } else if idx & 0x80 == 0 {
            Some(self.get(c).label)
        } else {
            Some(self.get(c).blank_label)
        }
    }

    #[inline(always)]
    pub fn from_rack(&self, idx: u8) -> Option<&'a str> {
        if idx >= self.len() {
            None
        } else {
            Some(self.get(idx).label)
        }
    }

    // blanked letters are worth the letter's score.
    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.get(idx & 0x7f).score
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    // case-insensitive, the blank is '_' or '?'.
    pub fn rack_tile(&self, c: char) -> Option<u8> {
        match c {
            '_' | '?' => Some(0),
            'a'..='z' | 'A'..='Z' => {
                let tile = (c.to_ascii_uppercase() as u8) - b'A' + 1;
                if tile < self.len() { Some(tile) } else { None }
            }
            _ => None,
        }
    }

    // lowercase means the letter is a blank.
    pub fn board_tile(&self, c: char) -> Option<u8> {
        match c {
            'A'..='Z' => self.rack_tile(c),
            'a'..='z' => self.rack_tile(c).map(|tile| tile | 0x80),
            _ => None,
        }
    }

    // letters only, case-insensitive; None if anything else is found.
    pub fn word_tiles(&self, s: &str) -> Option<Box<[u8]>> {
        s.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    self.rack_tile(c)
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn parse_rack(&self, s: &str) -> Option<Vec<u8>> {
        s.chars().map(|c| self.rack_tile(c)).collect()
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        let mut s = String::new();
        for &tile in rack {
            s.push_str(self.from_rack(tile).unwrap_or("#"));
        }
        s
    }

    pub fn fmt_word(&self, word: &[u8]) -> String {
        let mut s = String::new();
        for &tile in word {
            s.push_str(self.from_board(tile).unwrap_or("."));
        }
        s
    }
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        Tile {
            label: "_",
            blank_label: "_",
            freq: 2,
            score: 0,
        },
        Tile {
            label: "A",
            blank_label: "a",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "B",
            blank_label: "b",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "C",
            blank_label: "c",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "D",
            blank_label: "d",
            freq: 4,
            score: 2,
        },
        Tile {
            label: "E",
            blank_label: "e",
            freq: 12,
            score: 1,
        },
        Tile {
            label: "F",
            blank_label: "f",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "G",
            blank_label: "g",
            freq: 3,
            score: 2,
        },
        Tile {
            label: "H",
            blank_label: "h",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "I",
            blank_label: "i",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "J",
            blank_label: "j",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "K",
            blank_label: "k",
            freq: 1,
            score: 5,
        },
        Tile {
            label: "L",
            blank_label: "l",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "M",
            blank_label: "m",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "N",
            blank_label: "n",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "O",
            blank_label: "o",
            freq: 8,
            score: 1,
        },
        Tile {
            label: "P",
            blank_label: "p",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "Q",
            blank_label: "q",
            freq: 1,
            score: 10,
        },
        Tile {
            label: "R",
            blank_label: "r",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "S",
            blank_label: "s",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "T",
            blank_label: "t",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "U",
            blank_label: "u",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "V",
            blank_label: "v",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "W",
            blank_label: "w",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "X",
            blank_label: "x",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "Y",
            blank_label: "y",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "Z",
            blank_label: "z",
            freq: 1,
            score: 10,
        },
    ],
    num_tiles: 100,
});
