// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Premium {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    // scores as a double word.
    Center,
}

impl Premium {
    #[inline(always)]
    pub fn word_multiplier(self) -> i32 {
        match self {
            Premium::DoubleWord | Premium::Center => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }

    #[inline(always)]
    pub fn letter_multiplier(self) -> i32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    #[inline(always)]
    pub fn is_center(self) -> bool {
        self == Premium::Center
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Premium::None),
            'd' => Some(Premium::DoubleLetter),
            't' => Some(Premium::TripleLetter),
            '2' => Some(Premium::DoubleWord),
            '3' => Some(Premium::TripleWord),
            '*' => Some(Premium::Center),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    center: matrix::RowCol,
}

impl BoardLayout {
    // 3 = triple word, 2 = double word, t = triple letter, d = double letter,
    // * = center, . = plain. Exactly one center.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> error::Returns<Self> {
        let num_rows = rows.len();
        if num_rows == 0 || num_rows > i8::MAX as usize {
            return_error!(format!("layout must have 1 to {} rows", i8::MAX));
        }
        let num_cols = rows[0].as_ref().chars().count();
        if num_cols == 0 || num_cols > i8::MAX as usize {
            return_error!(format!("layout must have 1 to {} cols", i8::MAX));
        }
        let mut premiums = Vec::with_capacity(num_rows * num_cols);
        let mut center = None;
        for (row_num, row) in (0i8..).zip(rows.iter()) {
            let row = row.as_ref();
            if row.chars().count() != num_cols {
                return_error!(format!(
                    "layout row {} has {} cols, expected {}",
                    row_num + 1,
                    row.chars().count(),
                    num_cols
                ));
            }
            for (col_num, c) in (0i8..).zip(row.chars()) {
                let premium = match Premium::from_char(c) {
                    Some(premium) => premium,
                    None => {
                        return_error!(format!(
                            "invalid premium {:?} at {}",
                            c,
                            matrix::RowCol::new(row_num, col_num)
                        ));
                    }
                };
                if premium.is_center() {
                    if center.is_some() {
                        return_error!("layout has more than one center".into());
                    }
                    center = Some(matrix::RowCol::new(row_num, col_num));
                }
                premiums.push(premium);
            }
        }
        let Some(center) = center else {
            return_error!("layout has no center".into());
        };
        Ok(Self {
            premiums: premiums.into_boxed_slice(),
            dim: matrix::Dim {
                rows: num_rows as i8,
                cols: num_cols as i8,
            },
            center,
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn center(&self) -> matrix::RowCol {
        self.center
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, pos: matrix::RowCol) -> Premium {
        self.premiums[self.dim.at_row_col(pos.row, pos.col)]
    }

    #[inline(always)]
    pub fn is_center(&self, pos: matrix::RowCol) -> bool {
        self.premium_at(pos).is_center()
    }
}

pub static STANDARD_LAYOUT_ROWS: [&str; 15] = [
    "3..d...3...d..3",
    ".2...t...t...2.",
    "..2...d.d...2..",
    "d..2...d...2..d",
    "....2.....2....",
    ".t...t...t...t.",
    "..d...d.d...d..",
    "3..d...*...d..3",
    "..d...d.d...d..",
    ".t...t...t...t.",
    "....2.....2....",
    "d..2...d...2..d",
    "..2...d.d...2..",
    ".2...t...t...2.",
    "3..d...3...d..3",
];

pub fn make_standard_board_layout() -> BoardLayout {
    match BoardLayout::from_rows(&STANDARD_LAYOUT_ROWS) {
        Ok(board_layout) => board_layout,
        Err(err) => panic!("standard layout: {}", err),
    }
}
