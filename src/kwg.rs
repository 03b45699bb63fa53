// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// little endian u32:
// bits 0-21 = arc index
// bit 22 = last sibling
// bit 23 = accepts
// bits 24-31 = tile
#[derive(Clone, Copy)]
pub struct Node(u32);

impl Node {
    #[inline(always)]
    pub fn tile(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline(always)]
    pub fn accepts(&self) -> bool {
        self.0 & 0x800000 != 0
    }

    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.0 & 0x400000 != 0
    }

    #[inline(always)]
    pub fn arc_index(&self) -> i32 {
        (self.0 & 0x3fffff) as i32
    }
}

pub struct Kwg(Box<[Node]>);

pub static EMPTY_KWG_BYTES: &[u8] = b"\x00\x00\x40\x00";

impl std::ops::Index<i32> for Kwg {
    type Output = Node;

    #[inline(always)]
    fn index(&self, i: i32) -> &Node {
        &self.0[i as usize]
    }
}

impl Kwg {
    pub fn from_bytes_alloc(buf: &[u8]) -> error::Returns<Kwg> {
        if buf.is_empty() || buf.len() % 4 != 0 {
            return_error!(format!("kwg cannot be {} bytes", buf.len()));
        }
        let elts = buf
            .chunks_exact(4)
            .map(|b| Node(u32::from_le_bytes([b[0], b[1], b[2], b[3]])))
            .collect::<Box<_>>();
        if !elts[elts.len() - 1].is_end() {
            return_error!("kwg is truncated".into());
        }
        for node in elts.iter() {
            if node.arc_index() as usize >= elts.len() {
                return_error!(format!("kwg arc index {} out of range", node.arc_index()));
            }
        }
        Ok(Kwg(elts))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|node| node.0.to_le_bytes()).collect()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // returns the node for tile among the children of p, or -1.
    #[inline(always)]
    pub fn seek(&self, mut p: i32, tile: u8) -> i32 {
        if p >= 0 {
            p = self[p].arc_index();
            if p > 0 {
                loop {
                    let node = self[p];
                    if node.tile() == tile {
                        return p;
                    }
                    if node.is_end() {
                        return -1;
                    }
                    p += 1;
                }
            }
        }
        -1
    }

    pub fn accepts_word(&self, word: &[u8]) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut p = 0;
        for &tile in word {
            p = self.seek(p, tile);
            if p <= 0 {
                return false;
            }
        }
        self[p].accepts()
    }

    fn count_words_at(&self, word_counts: &mut [u32], p: i32) -> u32 {
        if word_counts[p as usize] == 0 {
            let node = self[p];
            word_counts[p as usize] = node.accepts() as u32
                + if node.arc_index() != 0 {
                    self.count_words_at(word_counts, node.arc_index())
                } else {
                    0
                }
                + if node.is_end() {
                    0
                } else {
                    self.count_words_at(word_counts, p + 1)
                };
        }
        word_counts[p as usize]
    }

    // number of words reachable from the root.
    pub fn count_words(&self) -> u32 {
        let arc_index = self[0].arc_index();
        if arc_index == 0 {
            return 0;
        }
        let mut word_counts = vec![0u32; self.0.len()];
        for p in (1..word_counts.len()).rev() {
            self.count_words_at(&mut word_counts, p as i32);
        }
        word_counts[arc_index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_kwg_accepts_nothing() {
        let kwg = Kwg::from_bytes_alloc(EMPTY_KWG_BYTES).unwrap();
        assert_eq!(kwg.len(), 1);
        assert_eq!(kwg.seek(0, 1), -1);
        assert!(!kwg.accepts_word(&[1, 2]));
        assert_eq!(kwg.count_words(), 0);
        assert_eq!(kwg.to_bytes(), EMPTY_KWG_BYTES);
    }

    #[test]
    fn rejects_truncated_bytes() {
        assert!(Kwg::from_bytes_alloc(b"\x00\x00\x40").is_err());
        assert!(Kwg::from_bytes_alloc(b"").is_err());
        // arc index 5 in a single-node kwg
        assert!(Kwg::from_bytes_alloc(b"\x05\x00\x40\x00").is_err());
        // root points at one child that does not end its sibling list
        assert!(Kwg::from_bytes_alloc(b"\x01\x00\x40\x00\x00\x00\x80\x03").is_err());
    }

    #[test]
    fn cut_off_lexicon_is_rejected() {
        let bytes = crate::build::build_dawg(&[
            vec![3, 1, 20].into_boxed_slice(),
            vec![4, 15, 7].into_boxed_slice(),
        ])
        .unwrap();
        let kwg = Kwg::from_bytes_alloc(&bytes).unwrap();
        assert!(kwg.accepts_word(&[4, 15, 7]));
        assert!(Kwg::from_bytes_alloc(&bytes[..bytes.len() - 4]).is_err());
    }
}
