// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error, matrix, tile};

// Premiums come from the layout and never change. Once a cell holds a tile
// it keeps that tile for the rest of the game.
#[derive(Clone)]
pub struct Board {
    board_layout: board_layout::BoardLayout,
    cells: Box<[Option<tile::Tile>]>,
    num_tiles: usize,
}

impl Board {
    pub fn new(board_layout: board_layout::BoardLayout) -> Self {
        let num_cells = board_layout.dim().num_cells();
        Self {
            board_layout,
            cells: vec![None; num_cells].into_boxed_slice(),
            num_tiles: 0,
        }
    }

    pub fn standard() -> Self {
        Self::new(board_layout::make_standard_board_layout())
    }

    #[inline(always)]
    pub fn layout(&self) -> &board_layout::BoardLayout {
        &self.board_layout
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.board_layout.dim()
    }

    #[inline(always)]
    pub fn contains(&self, pos: matrix::RowCol) -> bool {
        self.dim().contains(pos)
    }

    // off-board reads as empty.
    #[inline(always)]
    pub fn tile_at(&self, pos: matrix::RowCol) -> Option<tile::Tile> {
        if self.contains(pos) {
            self.cells[self.dim().at_row_col(pos.row, pos.col)]
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn letter_at(&self, pos: matrix::RowCol) -> Option<u8> {
        self.tile_at(pos).and_then(|tile| tile.letter())
    }

    #[inline(always)]
    pub fn is_occupied(&self, pos: matrix::RowCol) -> bool {
        self.tile_at(pos).is_some()
    }

    #[inline(always)]
    pub fn premium_at(&self, pos: matrix::RowCol) -> board_layout::Premium {
        self.board_layout.premium_at(pos)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_tiles == 0
    }

    #[inline(always)]
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    // the center only anchors the opening play.
    #[inline(always)]
    pub fn is_anchor(&self, pos: matrix::RowCol) -> bool {
        self.is_occupied(pos) || (self.is_empty() && self.board_layout.is_center(pos))
    }

    #[inline(always)]
    pub fn span_fits(&self, origin: matrix::RowCol, direction: matrix::Direction, len: usize) -> bool {
        len > 0
            && len <= i8::MAX as usize
            && self.contains(origin)
            && self.contains(origin.offset(direction, len as i8 - 1))
    }

    // Placing the same letter again is a no-op. The tile must already carry
    // its letter, so blanks are assigned before they get here.
    pub fn place(&mut self, pos: matrix::RowCol, tile: tile::Tile) -> error::Returns<()> {
        if !self.contains(pos) {
            return_error!(format!("{} is off the board", pos));
        }
        let Some(letter) = tile.letter() else {
            return_error!(format!("unassigned blank cannot be placed at {}", pos));
        };
        let idx = self.dim().at_row_col(pos.row, pos.col);
        match self.cells[idx] {
            Some(existing) if existing.letter() == Some(letter) => Ok(()),
            Some(existing) => {
                return_error!(format!(
                    "{} already holds {}, cannot place {}",
                    pos,
                    existing.letter().map_or('?', |x| x as char),
                    letter as char
                ));
            }
            None => {
                self.cells[idx] = Some(tile);
                self.num_tiles += 1;
                Ok(())
            }
        }
    }

    // The reverse of rows_text. Upper case letters are tiles, lower case
    // letters are blanks played as that letter, '.' or ' ' is empty.
    pub fn place_rows_text<S: AsRef<str>>(
        &mut self,
        alphabet: &alphabet::Alphabet,
        rows: &[S],
    ) -> error::Returns<()> {
        let dim = self.dim();
        if rows.len() != dim.rows as usize {
            return_error!(format!("board: need {} rows, found {} rows", dim.rows, rows.len()));
        }
        for (row, text) in (0i8..).zip(rows.iter()) {
            let text = text.as_ref();
            if text.chars().count() != dim.cols as usize {
                return_error!(format!(
                    "board row {}: need {} cols, found {} cols",
                    row + 1,
                    dim.cols,
                    text.chars().count()
                ));
            }
            for (col, c) in (0i8..).zip(text.chars()) {
                let pos = matrix::RowCol::new(row, col);
                let tile = match c {
                    '.' | ' ' => continue,
                    'A'..='Z' => tile::Tile::new(alphabet, c as u8),
                    'a'..='z' => tile::Tile::blank().assign(c.to_ascii_uppercase() as u8)?,
                    _ => return_error!(format!("board {}: invalid tile {:?}", pos, c)),
                };
                self.place(pos, tile)?;
            }
        }
        Ok(())
    }

    // one string per row, letters in place, blanks in lower case, '.' empty.
    pub fn rows_text(&self) -> Vec<String> {
        let dim = self.dim();
        (0..dim.rows)
            .map(|row| {
                (0..dim.cols)
                    .map(|col| match self.tile_at(matrix::RowCol::new(row, col)) {
                        Some(tile) => {
                            let c = tile.letter().map_or('?', |x| x as char);
                            if tile.is_blank() { c.to_ascii_lowercase() } else { c }
                        }
                        None => '.',
                    })
                    .collect()
            })
            .collect()
    }
}
