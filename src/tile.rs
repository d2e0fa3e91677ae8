// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// A blank gets its letter the first time it is placed and keeps it.
// assign() hands back a new frozen value instead of mutating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Letter { letter: u8, points: i8 },
    Blank { letter: Option<u8> },
}

impl Tile {
    pub fn new(alphabet: &alphabet::Alphabet, letter: u8) -> Self {
        assert!(alphabet::is_letter(letter), "not a letter: {:?}", letter);
        Tile::Letter {
            letter,
            points: alphabet.score(letter),
        }
    }

    #[inline(always)]
    pub fn blank() -> Self {
        Tile::Blank { letter: None }
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank { .. })
    }

    // None only for a blank that has not been placed yet.
    #[inline(always)]
    pub fn letter(&self) -> Option<u8> {
        match *self {
            Tile::Letter { letter, .. } => Some(letter),
            Tile::Blank { letter } => letter,
        }
    }

    #[inline(always)]
    pub fn points(&self) -> i32 {
        match *self {
            Tile::Letter { points, .. } => points as i32,
            Tile::Blank { .. } => 0,
        }
    }

    // Concrete tiles accept only their own letter.
    pub fn assign(self, letter: u8) -> error::Returns<Self> {
        if !alphabet::is_letter(letter) {
            return_error!(format!("not a letter: {:?}", letter as char));
        }
        match self {
            Tile::Letter { letter: own, .. } if own == letter => Ok(self),
            Tile::Letter { letter: own, .. } => {
                return_error!(format!(
                    "tile {} cannot be played as {}",
                    own as char, letter as char
                ));
            }
            Tile::Blank { letter: None } => Ok(Tile::Blank {
                letter: Some(letter),
            }),
            Tile::Blank { letter: Some(own) } if own == letter => Ok(self),
            Tile::Blank { letter: Some(own) } => {
                return_error!(format!(
                    "blank is already {}, cannot become {}",
                    own as char, letter as char
                ));
            }
        }
    }
}

impl std::fmt::Display for Tile {
    // A5, ?0, blank-as-e shown in lower case.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Tile::Letter { letter, points } => write!(f, "{}{}", letter as char, points),
            Tile::Blank { letter: None } => f.write_str("?0"),
            Tile::Blank {
                letter: Some(letter),
            } => write!(f, "{}0", letter.to_ascii_lowercase() as char),
        }
    }
}
