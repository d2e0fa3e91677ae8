// Copyright (C) 2020-2026 Andy Kurnia.

use std::io::Read;
use tileplace::{
    alphabet, board, display, error, lexicon, matrix, movegen, play_scorer, return_error, tile,
};

// board: one string per row. upper case for tiles, lower case for blanks
//        played as that letter, '.' for empty.
// rack: letters, '?' for blank.
// play: optional, scores this one play (1-based row and col).
// count: maximum number of plays returned, best first.
#[derive(serde::Deserialize)]
struct Question {
    board: Vec<String>,
    rack: String,
    #[serde(default)]
    play: Option<QuestionPlay>,
    #[serde(default = "default_count", rename = "count")]
    max_gen: usize,
}

fn default_count() -> usize {
    15
}

#[derive(serde::Deserialize)]
struct QuestionPlay {
    row: i8,
    col: i8,
    direction: matrix::Direction,
    word: String,
}

#[derive(serde::Serialize)]
struct PlayAnswer<'a> {
    #[serde(flatten)]
    placement: &'a movegen::Placement,
    total: i32,
    text: String,
}

fn parse_rack(s: &str) -> error::Returns<Vec<tile::Tile>> {
    let mut rack = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '?' => rack.push(tile::Tile::blank()),
            'A'..='Z' | 'a'..='z' => rack.push(tile::Tile::new(
                &alphabet::ENGLISH_ALPHABET,
                c.to_ascii_uppercase() as u8,
            )),
            _ => return_error!(format!("rack has invalid tile {:?}", c)),
        }
    }
    if rack.len() > 7 {
        return_error!(format!("rack has {} tiles, at most 7", rack.len()));
    }
    Ok(rack)
}

fn score_question_play(
    board: &board::Board,
    rack: &[tile::Tile],
    word_list: &lexicon::WordList,
    play: &QuestionPlay,
) -> error::Returns<serde_json::Value> {
    let origin = matrix::RowCol::new(play.row.saturating_sub(1), play.col.saturating_sub(1));
    let word = play.word.to_ascii_uppercase().into_bytes();
    if word.is_empty() || !word.iter().all(|c| c.is_ascii_uppercase()) {
        return_error!(format!("play word must be letters only, got {:?}", play.word));
    }
    if word.len() > word_list.max_len() {
        return_error!(format!("play word {:?} is longer than any word", play.word));
    }
    if !board.span_fits(origin, play.direction, word.len()) {
        return_error!(format!("play {:?} does not fit at {}", play.word, origin));
    }
    Ok(
        match play_scorer::score_play(board, origin, play.direction, &word, rack, word_list) {
            Ok(scored) => serde_json::json!({
                "valid": true,
                "in_word_list": word_list.contains(&word),
                "score": scored.score,
                "extras": scored.extras,
                "tiles_used": scored.num_tiles_used(),
                "total": scored.total(),
            }),
            Err(rejection) => serde_json::json!({
                "valid": false,
                "reason": rejection.to_string(),
            }),
        },
    )
}

// usage: json words.txt [question.json], question from stdin if omitted.
fn main() -> error::Returns<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?.start()?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        return_error!("usage: json words.txt [question.json]".into());
    }
    let word_list = lexicon::WordList::from_text(&std::fs::read_to_string(&args[1])?)?;
    let data = match args.get(2) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            data
        }
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let mut board = board::Board::standard();
    board.place_rows_text(&alphabet::ENGLISH_ALPHABET, &question.board)?;
    let rack = parse_rack(&question.rack)?;
    log::debug!(
        "board has {} tiles, rack {}",
        board.num_tiles(),
        display::fmt_rack(&rack)
    );

    let play_answer = match &question.play {
        Some(play) => score_question_play(&board, &rack, &word_list, play)?,
        None => serde_json::Value::Null,
    };

    let board_snapshot = movegen::BoardSnapshot {
        board: &board,
        word_list: &word_list,
    };
    let mut plays = movegen::collect_plays_parallel(board_snapshot, &rack, num_cpus::get());
    movegen::sort_placements(&mut plays);
    let found = plays.len();
    let best = plays
        .iter()
        .rev()
        .take(question.max_gen)
        .map(|placement| PlayAnswer {
            placement,
            total: placement.total(),
            text: display::fmt_placement(placement),
        })
        .collect::<Vec<_>>();

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "play": play_answer,
            "found": found,
            "plays": best,
        }))?
    );

    Ok(())
}
