// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, blank_resolver, board, inventory, lexicon, matrix, play_scorer, tile};

// The read-only state a scan runs against. Nothing here changes during a
// scan, so threads may share one snapshot.
#[derive(Clone, Copy)]
pub struct BoardSnapshot<'a> {
    pub board: &'a board::Board,
    pub word_list: &'a lexicon::WordList,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Placement {
    pub origin: matrix::RowCol,
    pub direction: matrix::Direction,
    pub word: String,
    // main word only.
    pub score: i32,
    pub extras: Vec<play_scorer::CrossWord>,
    // bit i set when word[i] comes from a blank.
    pub blank_mask: u32,
}

impl Placement {
    #[inline(always)]
    pub fn total(&self) -> i32 {
        self.score + self.extras.iter().map(|x| x.score).sum::<i32>()
    }
}

// Board letters along the span, or None when the span extends an existing
// word or touches no anchor.
fn span_tally(
    board: &board::Board,
    origin: matrix::RowCol,
    direction: matrix::Direction,
    len: i8,
) -> Option<alphabet::Tally> {
    if board.is_occupied(origin.offset(direction, -1))
        || board.is_occupied(origin.offset(direction, len))
    {
        log::trace!("{} {:?} len {}: extends a word", origin, direction, len);
        return None;
    }
    let mut tally = [0u8; alphabet::NUM_LETTERS];
    let mut anchored = false;
    for i in 0..len {
        let pos = origin.offset(direction, i);
        anchored |= board.is_anchor(pos);
        if let Some(letter) = board.letter_at(pos) {
            tally[alphabet::index_of(letter)] += 1;
        }
    }
    if !anchored {
        log::trace!("{} {:?} len {}: not anchored", origin, direction, len);
        return None;
    }
    Some(tally)
}

fn gen_placements_of<'a>(
    board_snapshot: BoardSnapshot<'a>,
    rack: &'a [tile::Tile],
    inventory: inventory::RackInventory,
    len: usize,
    direction: matrix::Direction,
) -> impl Iterator<Item = Placement> + 'a {
    let board = board_snapshot.board;
    let word_list = board_snapshot.word_list;
    let words = word_list.words_of_len(len);
    let tallies = word_list.tallies_of_len(len);
    board
        .dim()
        .origins(direction, len as i8)
        .filter_map(move |origin| {
            span_tally(board, origin, direction, len as i8).map(|board_tally| (origin, board_tally))
        })
        .flat_map(move |(origin, board_tally)| {
            words
                .iter()
                .zip(tallies.iter())
                .filter(move |(_, word_tally)| inventory.can_supply(word_tally, &board_tally))
                .filter_map(move |(word, _)| {
                    let scored =
                        play_scorer::score_play(board, origin, direction, word, rack, word_list)
                            .ok()?;
                    Some(Placement {
                        origin,
                        direction,
                        word: word.iter().map(|&c| c as char).collect(),
                        score: scored.score,
                        extras: scored.extras,
                        blank_mask: blank_resolver::blank_positions(
                            board, origin, direction, word, &inventory,
                        ),
                    })
                })
        })
}

// Every legal placement for rack, lazily, in no particular order. Stopping
// early is free. The board must not change while the iterator is alive.
pub fn gen_placements<'a>(
    board_snapshot: BoardSnapshot<'a>,
    rack: &'a [tile::Tile],
) -> impl Iterator<Item = Placement> + 'a {
    assert!(rack.len() <= 32, "rack of {} tiles", rack.len());
    let inventory = inventory::RackInventory::of_rack(rack);
    (1..=board_snapshot.word_list.max_len())
        .flat_map(|len| matrix::Direction::BOTH.map(|direction| (len, direction)))
        .flat_map(move |(len, direction)| {
            gen_placements_of(board_snapshot, rack, inventory, len, direction)
        })
}

// Same placements as gen_placements, collected over scoped threads. Each
// thread takes (length, direction) items off a shared counter and fills its
// own vector.
pub fn collect_plays_parallel(
    board_snapshot: BoardSnapshot<'_>,
    rack: &[tile::Tile],
    num_threads: usize,
) -> Vec<Placement> {
    assert!(rack.len() <= 32, "rack of {} tiles", rack.len());
    let inventory = inventory::RackInventory::of_rack(rack);
    let work_items = (1..=board_snapshot.word_list.max_len())
        .flat_map(|len| matrix::Direction::BOTH.map(|direction| (len, direction)))
        .collect::<Vec<_>>();
    let num_threads = num_threads.clamp(1, work_items.len().max(1));
    let next_item = std::sync::atomic::AtomicUsize::new(0);
    let plays = std::thread::scope(|s| {
        let handles = (0..num_threads)
            .map(|_| {
                s.spawn(|| {
                    let mut found = Vec::new();
                    loop {
                        let idx = next_item.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                        let Some(&(len, direction)) = work_items.get(idx) else {
                            break;
                        };
                        found.extend(gen_placements_of(
                            board_snapshot,
                            rack,
                            inventory,
                            len,
                            direction,
                        ));
                    }
                    found
                })
            })
            .collect::<Vec<_>>();
        let mut plays = Vec::new();
        for handle in handles {
            match handle.join() {
                Ok(found) => plays.extend(found),
                Err(e) => std::panic::resume_unwind(e),
            }
        }
        plays
    });
    log::debug!(
        "{} work items on {} threads: {} plays",
        work_items.len(),
        num_threads,
        plays.len()
    );
    plays
}

// lowest total first, then by word, so the best plays end up nearest the prompt.
pub fn sort_placements(placements: &mut [Placement]) {
    placements.sort_by(|a, b| {
        a.total()
            .cmp(&b.total())
            .then_with(|| a.word.cmp(&b.word))
            .then_with(|| a.origin.row.cmp(&b.origin.row))
            .then_with(|| a.origin.col.cmp(&b.origin.col))
            .then_with(|| a.direction.is_down().cmp(&b.direction.is_down()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::matrix::{Direction, RowCol};
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

    fn words() -> lexicon::WordList {
        lexicon::WordList::from_words([
            "A", "AT", "TA", "CAT", "ACT", "CATS", "SCAT", "TACT", "TAX", "AX", "XI", "QI", "ZZZ",
        ])
        .unwrap()
    }

    fn sorted(mut placements: Vec<Placement>) -> Vec<Placement> {
        sort_placements(&mut placements);
        placements
    }

    #[test]
    fn opening_plays_cross_the_center() {
        let board = board::Board::standard();
        let word_list = words();
        let snapshot = BoardSnapshot {
            board: &board,
            word_list: &word_list,
        };
        let r = rack("CAT");
        let plays = gen_placements(snapshot, &r).collect::<Vec<_>>();
        assert!(!plays.is_empty());
        for play in plays.iter() {
            let covers_center = (0..play.word.len() as i8)
                .any(|i| play.origin.offset(play.direction, i) == RowCol::new(7, 7));
            assert!(covers_center, "{:?}", play);
            assert_eq!(play.blank_mask, 0);
        }
        // CAT, ACT, AT, TA, A in both directions at every center-covering origin.
        assert_eq!(plays.iter().filter(|p| p.word == "CAT").count(), 6);
        assert_eq!(plays.iter().filter(|p| p.word == "A").count(), 2);
        assert!(!plays.iter().any(|p| p.word == "CATS" || p.word == "TACT"));
        let best = plays.iter().map(|p| p.total()).max().unwrap();
        assert_eq!(best, 60);
    }

    #[test]
    fn every_placement_is_accepted_by_the_scorer() {
        let mut board = board::Board::standard();
        for (i, &c) in (6i8..).zip(b"CAT".iter()) {
            board
                .place(RowCol::new(7, i), Tile::new(&ENGLISH_ALPHABET, c))
                .unwrap();
        }
        let word_list = words();
        let snapshot = BoardSnapshot {
            board: &board,
            word_list: &word_list,
        };
        let r = rack("SXIT?");
        let plays = gen_placements(snapshot, &r).collect::<Vec<_>>();
        assert!(plays.iter().any(|p| p.word == "CATS"));
        assert!(plays.iter().any(|p| p.word == "TAX" && p.direction == Direction::Down));
        for play in plays.iter() {
            let scored = play_scorer::score_play(
                &board,
                play.origin,
                play.direction,
                play.word.as_bytes(),
                &r,
                &word_list,
            )
            .unwrap();
            assert_eq!(scored.score, play.score);
            assert_eq!(scored.extras, play.extras);
        }
    }

    #[test]
    fn stopping_early_is_fine_and_scans_repeat() {
        let board = board::Board::standard();
        let word_list = words();
        let snapshot = BoardSnapshot {
            board: &board,
            word_list: &word_list,
        };
        let r = rack("QI?");
        assert!(gen_placements(snapshot, &r).next().is_some());
        let first = sorted(gen_placements(snapshot, &r).collect());
        let second = sorted(gen_placements(snapshot, &r).collect());
        assert_eq!(first, second);
    }

    #[test]
    fn all_blank_rack_marks_every_letter() {
        let board = board::Board::standard();
        let word_list = words();
        let snapshot = BoardSnapshot {
            board: &board,
            word_list: &word_list,
        };
        let r = rack("???????");
        let plays = gen_placements(snapshot, &r).collect::<Vec<_>>();
        assert!(plays.iter().any(|p| p.word == "ZZZ"));
        for play in plays.iter() {
            assert_eq!(play.blank_mask, (1u32 << play.word.len()) - 1);
            assert_eq!(play.score, 0);
        }
    }

    #[test]
    fn parallel_scan_finds_the_same_placements() {
        let mut board = board::Board::standard();
        for (i, &c) in (6i8..).zip(b"TAX".iter()) {
            board
                .place(RowCol::new(i, 7), Tile::new(&ENGLISH_ALPHABET, c))
                .unwrap();
        }
        let word_list = words();
        let snapshot = BoardSnapshot {
            board: &board,
            word_list: &word_list,
        };
        let r = rack("CATS?I");
        let sequential = sorted(gen_placements(snapshot, &r).collect());
        for num_threads in [1, 3, 64] {
            let parallel = sorted(collect_plays_parallel(snapshot, &r, num_threads));
            assert_eq!(parallel, sequential);
        }
        assert!(!sequential.is_empty());
    }

    #[test]
    fn empty_word_list_yields_nothing() {
        let board = board::Board::standard();
        let word_list = lexicon::WordList::from_words(Vec::<String>::new()).unwrap();
        let snapshot = BoardSnapshot {
            board: &board,
            word_list: &word_list,
        };
        let r = rack("ABC");
        assert_eq!(gen_placements(snapshot, &r).count(), 0);
        assert!(collect_plays_parallel(snapshot, &r, 4).is_empty());
    }

    #[test]
    fn sorting_is_by_total_then_word() {
        let play = |word: &str, score| Placement {
            origin: RowCol::new(7, 7),
            direction: Direction::Across,
            word: word.into(),
            score,
            extras: vec![],
            blank_mask: 0,
        };
        let mut plays = vec![play("B", 5), play("A", 5), play("C", 2)];
        sort_placements(&mut plays);
        assert_eq!(
            plays.iter().map(|p| p.word.as_str()).collect::<Vec<_>>(),
            vec!["C", "A", "B"]
        );
    }
}
