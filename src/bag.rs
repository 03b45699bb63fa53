// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

// Undrawn tiles. Draws come off the front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bag(pub Vec<u8>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for tile in 0..alphabet.len() {
            for _ in 0..alphabet.freq(tile) {
                bag.push(tile);
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // A short bag gives a short draw.
    pub fn draw(&mut self, n: usize) -> Vec<u8> {
        let n = n.min(self.0.len());
        self.0.drain(..n).collect()
    }

    pub fn replenish(&mut self, rack: &mut Vec<u8>, rack_size: usize) {
        let drawn = self.draw(rack_size.saturating_sub(rack.len()));
        rack.extend_from_slice(&drawn);
    }
}
