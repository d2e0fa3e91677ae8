// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, inventory, matrix};

// Bit i set when word[i] lands on an empty cell and the rack has run out of
// concrete tiles of that letter by then. Occurrences are consumed left to
// right, so only the overflow occurrences of a letter come from blanks.
// This agrees with the scorer, which also takes exact letters first.
pub fn blank_positions(
    board: &board::Board,
    origin: matrix::RowCol,
    direction: matrix::Direction,
    word: &[u8],
    inventory: &inventory::RackInventory,
) -> u32 {
    let mut remaining = inventory.tally;
    let mut blank_mask = 0u32;
    for (i, &letter) in (0i8..).zip(word.iter()) {
        if board.is_occupied(origin.offset(direction, i)) {
            continue;
        }
        let idx = alphabet::index_of(letter);
        if remaining[idx] > 0 {
            remaining[idx] -= 1;
        } else {
            blank_mask |= 1 << i;
        }
    }
    blank_mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::matrix::{Direction, RowCol};
    use crate::tile::Tile;

    fn inventory_of(s: &str) -> inventory::RackInventory {
        let rack = s
            .bytes()
            .map(|b| {
                if b == b'?' {
                    Tile::blank()
                } else {
                    Tile::new(&ENGLISH_ALPHABET, b)
                }
            })
            .collect::<Vec<_>>();
        inventory::RackInventory::of_rack(&rack)
    }

    #[test]
    fn only_overflow_occurrences_are_blanks() {
        let board = board::Board::standard();
        let origin = RowCol::new(7, 4);
        assert_eq!(
            blank_positions(&board, origin, Direction::Across, b"EERIE", &inventory_of("ERIE?")),
            0b10000
        );
        assert_eq!(
            blank_positions(&board, origin, Direction::Across, b"EERIE", &inventory_of("ERI??")),
            0b10010
        );
        assert_eq!(
            blank_positions(&board, origin, Direction::Across, b"CAT", &inventory_of("???")),
            0b111
        );
        assert_eq!(
            blank_positions(&board, origin, Direction::Across, b"CAT", &inventory_of("TAC")),
            0
        );
    }

    #[test]
    fn board_tiles_are_never_blank_sourced() {
        let mut board = board::Board::standard();
        board
            .place(RowCol::new(7, 7), Tile::new(&ENGLISH_ALPHABET, b'A'))
            .unwrap();
        // the A is on the board, C and T come from blanks.
        assert_eq!(
            blank_positions(&board, RowCol::new(7, 6), Direction::Across, b"CAT", &inventory_of("??")),
            0b101
        );
        assert_eq!(
            blank_positions(&board, RowCol::new(6, 7), Direction::Down, b"TAA", &inventory_of("A?")),
            0b001
        );
    }
}
