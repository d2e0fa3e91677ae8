// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, tile};

// What a rack can contribute: concrete letters by count, plus blanks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RackInventory {
    pub tally: alphabet::Tally,
    pub num_blanks: u8,
}

impl RackInventory {
    // Blanks count as blanks even if some caller already assigned them.
    pub fn of_rack(rack: &[tile::Tile]) -> Self {
        let mut ret = Self::default();
        for tile in rack {
            match *tile {
                tile::Tile::Letter { letter, .. } => ret.tally[alphabet::index_of(letter)] += 1,
                tile::Tile::Blank { .. } => ret.num_blanks += 1,
            }
        }
        ret
    }

    // Letters the rack cannot cover with concrete tiles, summed over the
    // alphabet, given what the board already supplies along the span.
    #[inline(always)]
    pub fn shortfall(&self, word_tally: &alphabet::Tally, board_tally: &alphabet::Tally) -> u32 {
        let mut shortfall = 0u32;
        for i in 0..alphabet::NUM_LETTERS {
            let needed = word_tally[i].saturating_sub(board_tally[i]);
            shortfall += needed.saturating_sub(self.tally[i]) as u32;
        }
        shortfall
    }

    // Necessary, not sufficient. The scorer does the real allocation.
    #[inline(always)]
    pub fn can_supply(&self, word_tally: &alphabet::Tally, board_tally: &alphabet::Tally) -> bool {
        self.shortfall(word_tally, board_tally) <= self.num_blanks as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{ENGLISH_ALPHABET, tally_of};
    use crate::tile::Tile;

    fn rack(s: &str) -> Vec<Tile> {
        s.bytes()
            .map(|b| {
                if b == b'?' {
                    Tile::blank()
                } else {
                    Tile::new(&ENGLISH_ALPHABET, b)
                }
            })
            .collect()
    }

    #[test]
    fn counts_letters_and_blanks() {
        let inventory = RackInventory::of_rack(&rack("AAB??"));
        assert_eq!(inventory.tally[0], 2);
        assert_eq!(inventory.tally[1], 1);
        assert_eq!(inventory.num_blanks, 2);
    }

    #[test]
    fn board_letters_reduce_what_is_needed() {
        let inventory = RackInventory::of_rack(&rack("CT"));
        let empty = [0u8; alphabet::NUM_LETTERS];
        assert!(!inventory.can_supply(&tally_of(b"CAT"), &empty));
        assert_eq!(inventory.shortfall(&tally_of(b"CAT"), &empty), 1);
        assert!(inventory.can_supply(&tally_of(b"CAT"), &tally_of(b"A")));
        // surplus on the board never helps another letter.
        assert!(!inventory.can_supply(&tally_of(b"CAT"), &tally_of(b"ZZ")));
    }

    #[test]
    fn blanks_cover_the_whole_shortfall() {
        let inventory = RackInventory::of_rack(&rack("E??"));
        let empty = [0u8; alphabet::NUM_LETTERS];
        assert_eq!(inventory.shortfall(&tally_of(b"EEEE"), &empty), 3);
        assert!(!inventory.can_supply(&tally_of(b"EEEE"), &empty));
        assert!(inventory.can_supply(&tally_of(b"EEE"), &empty));
        assert!(inventory.can_supply(&tally_of(b"EYE"), &empty));
        let all_blanks = RackInventory::of_rack(&rack("???????"));
        assert!(all_blanks.can_supply(&tally_of(b"QUIZZES"), &empty));
        assert!(!all_blanks.can_supply(&tally_of(b"QUIZZERS"), &empty));
    }
}
