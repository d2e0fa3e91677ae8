// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, matrix, movegen, tile};

#[inline(always)]
pub fn empty_label(premium: board_layout::Premium) -> &'static str {
    match premium {
        board_layout::Premium::Center => "*",
        board_layout::Premium::TripleWord => "=",
        board_layout::Premium::DoubleWord => "-",
        board_layout::Premium::TripleLetter => "\"",
        board_layout::Premium::DoubleLetter => "'",
        board_layout::Premium::None => " ",
    }
}

// placed letter, lower case when it came from a blank.
#[inline(always)]
pub fn tile_label(tile: &tile::Tile) -> char {
    let c = tile.letter().map_or('?', |x| x as char);
    if tile.is_blank() {
        c.to_ascii_lowercase()
    } else {
        c
    }
}

pub fn print_legend() {
    println!(
        "{}=2xLetter {}=3xLetter {}=2xWord {}=3xWord {}=start",
        empty_label(board_layout::Premium::DoubleLetter),
        empty_label(board_layout::Premium::TripleLetter),
        empty_label(board_layout::Premium::DoubleWord),
        empty_label(board_layout::Premium::TripleWord),
        empty_label(board_layout::Premium::Center),
    );
}

pub fn print_board(board: &board::Board) {
    let dim = board.dim();
    print!("   ");
    for c in 0..dim.cols {
        print!(" {:02}", c + 1);
    }
    println!();
    print!("   +");
    for _ in 1..dim.cols {
        print!("---");
    }
    println!("--+");
    for r in 0..dim.rows {
        print!("{:02} |", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                print!(" ")
            }
            let pos = matrix::RowCol::new(r, c);
            match board.tile_at(pos) {
                Some(tile) => print!("{} ", tile_label(&tile)),
                None => print!("{} ", empty_label(board.premium_at(pos))),
            }
        }
        println!("|{:02}", r + 1);
    }
    print!("   +");
    for _ in 1..dim.cols {
        print!("---");
    }
    println!("--+");
}

pub fn fmt_rack(rack: &[tile::Tile]) -> String {
    rack.iter()
        .map(|tile| tile.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// blank-sourced letters in lower case.
pub fn fmt_word(word: &str, blank_mask: u32) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if blank_mask & (1 << i) != 0 {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

// 8,7,H,CAt=10, AX=9, total=19
pub fn fmt_placement(placement: &movegen::Placement) -> String {
    let mut s = format!(
        "{},{},{}={}",
        placement.origin,
        if placement.direction.is_down() { 'V' } else { 'H' },
        fmt_word(&placement.word, placement.blank_mask),
        placement.score
    );
    for extra in placement.extras.iter() {
        s.push_str(&format!(", {}={}", extra.word, extra.score));
    }
    if !placement.extras.is_empty() {
        s.push_str(&format!(", total={}", placement.total()));
    }
    s
}
