// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, tile};
use rand::prelude::*;

// Tiles are drawn from the end.
pub struct Bag(pub Vec<tile::Tile>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for idx in 0..alphabet::NUM_LETTERS {
            let letter = alphabet::letter_at(idx);
            for _ in 0..alphabet.freq(letter) {
                bag.push(tile::Tile::new(alphabet, letter));
            }
        }
        for _ in 0..alphabet.blank_freq() {
            bag.push(tile::Tile::blank());
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<tile::Tile> {
        self.0.pop()
    }

    pub fn replenish(&mut self, rack: &mut Vec<tile::Tile>, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(tile) => rack.push(tile),
                None => break,
            }
        }
    }

    // put back the tiles at random positions. keep the rest of the bag in the same order.
    pub fn put_back(&mut self, rng: &mut dyn RngCore, tiles: &[tile::Tile]) {
        for &tile in tiles {
            let idx = rng.random_range(0..=self.0.len());
            self.0.insert(idx, tile);
        }
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::tile::Tile;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn full_distribution() {
        let bag = Bag::new(&ENGLISH_ALPHABET);
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.0.iter().filter(|t| t.is_blank()).count(), 2);
        assert_eq!(bag.0.iter().filter(|t| t.letter() == Some(b'E')).count(), 12);
        assert_eq!(bag.0.iter().map(|t| t.points()).sum::<i32>(), 187);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Bag::new(&ENGLISH_ALPHABET);
        let mut b = a.clone();
        a.shuffle(&mut ChaCha20Rng::seed_from_u64(42));
        b.shuffle(&mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn replenish_stops_when_empty() {
        let mut bag = Bag(vec![Tile::blank(); 3]);
        let mut rack = Vec::new();
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 3);
        assert!(bag.is_empty());
        bag.put_back(&mut ChaCha20Rng::seed_from_u64(1), &rack);
        assert_eq!(bag.len(), 3);
    }
}
