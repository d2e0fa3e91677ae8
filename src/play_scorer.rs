// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, lexicon, matrix, tile};

pub const ALL_TILES_USED: &str = "all tiles used";
pub const ALL_TILES_USED_BONUS: i32 = 50;

// A word formed alongside the main word, or the all-tiles-used bonus.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CrossWord {
    pub word: String,
    pub score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredPlay {
    // main word only, extras are separate.
    pub score: i32,
    // bit i set when rack[i] was used.
    pub used_tiles: u32,
    pub extras: Vec<CrossWord>,
}

impl ScoredPlay {
    #[inline(always)]
    pub fn total(&self) -> i32 {
        self.score + self.extras.iter().map(|x| x.score).sum::<i32>()
    }

    #[inline(always)]
    pub fn num_tiles_used(&self) -> u32 {
        self.used_tiles.count_ones()
    }
}

// Why a placement is not a legal play. None of these are fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    ExtendsExistingWord { at: matrix::RowCol },
    LetterConflict { at: matrix::RowCol, on_board: u8, wanted: u8 },
    InsufficientTiles { at: matrix::RowCol, letter: u8 },
    NotConnected,
    NoTilesUsed,
    InvalidCrossWord { at: matrix::RowCol, word: String },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::ExtendsExistingWord { at } => {
                write!(f, "word runs into the tile at {}", at)
            }
            Rejection::LetterConflict {
                at,
                on_board,
                wanted,
            } => write!(
                f,
                "{} already holds {}, not {}",
                at, *on_board as char, *wanted as char
            ),
            Rejection::InsufficientTiles { at, letter } => {
                write!(f, "no tile left for {} at {}", *letter as char, at)
            }
            Rejection::NotConnected => f.write_str("word is not connected to any tile"),
            Rejection::NoTilesUsed => f.write_str("word does not place any new tile"),
            Rejection::InvalidCrossWord { at, word } => {
                write!(f, "{} formed at {} is not a word", word, at)
            }
        }
    }
}

impl std::error::Error for Rejection {}

#[inline(always)]
pub fn full_rack_mask(rack_len: usize) -> u32 {
    if rack_len == 0 {
        0
    } else {
        u32::MAX >> (32 - rack_len)
    }
}

// Exact letter first, a blank only if no exact letter is left.
#[inline(always)]
pub fn pick_rack_tile(rack: &[tile::Tile], used_tiles: u32, letter: u8) -> Option<usize> {
    let is_free = |&(j, _): &(usize, &tile::Tile)| used_tiles & (1 << j) == 0;
    rack.iter()
        .enumerate()
        .filter(is_free)
        .find(|(_, t)| matches!(t, tile::Tile::Letter { letter: l, .. } if *l == letter))
        .or_else(|| {
            rack.iter()
                .enumerate()
                .filter(is_free)
                .find(|(_, t)| t.is_blank())
        })
        .map(|(j, _)| j)
}

// The maximal run through pos in direction, with pos holding the new tile.
// None when pos has no neighbor in that direction.
fn cross_word(
    board: &board::Board,
    pos: matrix::RowCol,
    direction: matrix::Direction,
    new_tile: &tile::Tile,
    letter: u8,
) -> Option<(String, i32)> {
    let mut start = pos;
    while board.is_occupied(start.offset(direction, -1)) {
        start = start.offset(direction, -1);
    }
    let mut end = pos;
    while board.is_occupied(end.offset(direction, 1)) {
        end = end.offset(direction, 1);
    }
    if start == end {
        return None;
    }
    let mut word = String::new();
    let mut word_score = 0;
    let mut word_multiplier = 1;
    let mut cur = start;
    loop {
        let premium = board.premium_at(cur);
        let (this_letter, points) = if cur == pos {
            (letter, new_tile.points())
        } else {
            match board.tile_at(cur) {
                Some(t) => (t.letter().unwrap_or(b'?'), t.points()),
                None => break,
            }
        };
        word.push(this_letter as char);
        word_score += points * premium.letter_multiplier();
        word_multiplier *= premium.word_multiplier();
        if cur == end {
            break;
        }
        cur = cur.offset(direction, 1);
    }
    Some((word, word_score * word_multiplier))
}

// Validates one placement against the board and rack and scores it.
//
// Premiums count on every cell of the word, including cells that already
// held a tile. The returned score is the main word only; cross words and the
// all-tiles-used bonus come back in extras.
//
// Panics on an empty word, a word longer than the longest word list bucket,
// a span that leaves the board, non A-Z letters, or more than 32 rack tiles.
pub fn score_play(
    board: &board::Board,
    origin: matrix::RowCol,
    direction: matrix::Direction,
    word: &[u8],
    rack: &[tile::Tile],
    word_list: &lexicon::WordList,
) -> Result<ScoredPlay, Rejection> {
    let len = word.len();
    assert!(
        len > 0 && len <= word_list.max_len(),
        "word length {} outside 1..={}",
        len,
        word_list.max_len()
    );
    assert!(
        board.span_fits(origin, direction, len),
        "{} letters from {} do not fit",
        len,
        origin
    );
    assert!(
        word.iter().all(|&c| c.is_ascii_uppercase()),
        "word must be A-Z: {:?}",
        String::from_utf8_lossy(word)
    );
    assert!(rack.len() <= 32, "rack of {} tiles", rack.len());

    for edge in [origin.offset(direction, -1), origin.offset(direction, len as i8)] {
        if board.is_occupied(edge) {
            return Err(Rejection::ExtendsExistingWord { at: edge });
        }
    }

    let perpendicular = direction.perpendicular();
    let mut used_tiles = 0u32;
    let mut connected = false;
    let mut main_score = 0;
    let mut word_multiplier = 1;
    let mut extras = Vec::new();
    for (i, &letter) in (0i8..).zip(word.iter()) {
        let pos = origin.offset(direction, i);
        let premium = board.premium_at(pos);
        word_multiplier *= premium.word_multiplier();
        connected |= board.is_anchor(pos);
        if let Some(existing) = board.tile_at(pos) {
            let on_board = existing.letter().unwrap_or(b'?');
            if on_board != letter {
                return Err(Rejection::LetterConflict {
                    at: pos,
                    on_board,
                    wanted: letter,
                });
            }
            main_score += existing.points() * premium.letter_multiplier();
            continue;
        }
        let Some(j) = pick_rack_tile(rack, used_tiles, letter) else {
            return Err(Rejection::InsufficientTiles { at: pos, letter });
        };
        used_tiles |= 1 << j;
        let new_tile = &rack[j];
        main_score += new_tile.points() * premium.letter_multiplier();
        if let Some((cross, cross_score)) = cross_word(board, pos, perpendicular, new_tile, letter) {
            if !word_list.contains(cross.as_bytes()) {
                return Err(Rejection::InvalidCrossWord {
                    at: pos,
                    word: cross,
                });
            }
            extras.push(CrossWord {
                word: cross,
                score: cross_score,
            });
        }
    }

    if !connected {
        return Err(Rejection::NotConnected);
    }
    if used_tiles == 0 {
        return Err(Rejection::NoTilesUsed);
    }
    if used_tiles == full_rack_mask(rack.len()) {
        extras.push(CrossWord {
            word: ALL_TILES_USED.into(),
            score: ALL_TILES_USED_BONUS,
        });
    }
    Ok(ScoredPlay {
        score: main_score * word_multiplier,
        used_tiles,
        extras,
    })
}
