// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use tileplace::{
    display, error, game_config, game_state, lexicon, matrix, movegen, return_error, rlhelper,
};

// usage: shell [words.txt] [num_players] [seed]
struct Args {
    word_list_path: String,
    num_players: u8,
    seed: u64,
}

fn parse_args() -> error::Returns<Args> {
    let args = std::env::args().collect::<Vec<_>>();
    let word_list_path = args.get(1).cloned().unwrap_or_else(|| "words.txt".into());
    let num_players = match args.get(2) {
        Some(s) => s.parse::<u8>()?,
        None => 2,
    };
    if num_players == 0 {
        return_error!("need at least one player".into());
    }
    let seed = match args.get(3) {
        Some(s) => s.parse::<u64>()?,
        None => rand::rng().random(),
    };
    Ok(Args {
        word_list_path,
        num_players,
        seed,
    })
}

// row,col,h/v,word with 1-based row and col.
fn parse_play(s: &str) -> error::Returns<(matrix::RowCol, matrix::Direction, Vec<u8>)> {
    let parts = s.split(',').map(|x| x.trim()).collect::<Vec<_>>();
    if parts.len() != 4 {
        return_error!(format!("expected row,col,h/v,word, got {:?}", s));
    }
    let row = parts[0].parse::<i8>()?;
    let col = parts[1].parse::<i8>()?;
    if row < 1 || col < 1 {
        return_error!(format!("row and col start at 1, got {},{}", row, col));
    }
    let direction = match parts[2] {
        "h" | "H" => matrix::Direction::Across,
        "v" | "V" => matrix::Direction::Down,
        _ => return_error!(format!("direction must be h or v, got {:?}", parts[2])),
    };
    let word = parts[3].to_ascii_uppercase().into_bytes();
    if word.is_empty() || !word.iter().all(|c| c.is_ascii_uppercase()) {
        return_error!(format!("word must be letters only, got {:?}", parts[3]));
    }
    Ok((matrix::RowCol::new(row - 1, col - 1), direction, word))
}

fn export_plays(path: &str, plays: &[movegen::Placement]) -> error::Returns<()> {
    let mut csv_out = csv::Writer::from_path(path)?;
    csv_out.write_record(["row", "col", "dir", "word", "score", "extras", "total"])?;
    for play in plays {
        let extras = play
            .extras
            .iter()
            .map(|x| format!("{}={}", x.word, x.score))
            .collect::<Vec<_>>()
            .join(" ");
        csv_out.serialize((
            play.origin.row + 1,
            play.origin.col + 1,
            if play.direction.is_down() { "V" } else { "H" },
            display::fmt_word(&play.word, play.blank_mask),
            play.score,
            extras,
            play.total(),
        ))?;
    }
    csv_out.flush()?;
    Ok(())
}

fn print_turn(game_state: &game_state::GameState) {
    display::print_legend();
    display::print_board(&game_state.board);
    let player = game_state.current_player();
    println!(
        "Player {} ({}) tiles: {}",
        game_state.turn + 1,
        player.score,
        display::fmt_rack(&player.rack)
    );
}

fn main() -> error::Returns<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?.start()?;
    let args = parse_args()?;
    let word_list = lexicon::WordList::from_text(&std::fs::read_to_string(&args.word_list_path)?)?;
    log::info!(
        "{} words from {}, seed {}",
        word_list.len(),
        args.word_list_path,
        args.seed
    );
    let game_config = game_config::make_common_english_game_config(args.num_players);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(args.seed);
    let mut game_state = game_state::GameState::new(&game_config, &mut rng);
    let mut rl = rlhelper::new_rl_editor()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    let mut last_plays = Vec::<movegen::Placement>::new();
    print_turn(&game_state);

    while !game_state.is_over() {
        let Some((line, source)) = cmd_stack.pop() else {
            match rl.readline("Enter row,col,h/v,word or help: ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
            continue;
        };
        if let Some((filename, line_num)) = source {
            println!("{}:{}> {}", filename, line_num, line);
        }
        let strings = match shell_words::split(&line) {
            Ok(strings) => strings,
            Err(err) => {
                println!("Bad quoting: {:?}", err);
                continue;
            }
        };
        if strings.is_empty() {
            let snapshot = game_state.board_snapshot(&word_list);
            let mut plays = movegen::collect_plays_parallel(
                snapshot,
                &game_state.current_player().rack,
                num_cpus::get(),
            );
            movegen::sort_placements(&mut plays);
            for play in plays.iter() {
                println!("{}", display::fmt_placement(play));
            }
            println!("done - {} plays", plays.len());
            last_plays = plays;
            continue;
        }
        match strings[0].as_str() {
            "help" => {
                println!("Commands: pass | rack | help | seed | export <file.csv> | source <file> | exit");
                println!("or enter row,col,h/v,word to play a word");
                println!("or press enter to list every play");
            }
            "seed" => {
                println!("Seed={}", args.seed);
            }
            "exit" | "quit" => {
                break;
            }
            "pass" => {
                game_state.pass();
                last_plays.clear();
                if !game_state.is_over() {
                    print_turn(&game_state);
                }
            }
            "rack" => {
                game_state.exchange_rack(&mut rng);
                last_plays.clear();
                print_turn(&game_state);
            }
            "export" => {
                if strings.len() > 1 {
                    match export_plays(&strings[1], &last_plays) {
                        Ok(()) => println!("wrote {} plays to {}", last_plays.len(), strings[1]),
                        Err(err) => println!("cannot export: {}", err),
                    }
                } else {
                    println!("need another arg");
                }
            }
            "source" => {
                if strings.len() > 1 {
                    match std::fs::read_to_string(&strings[1]) {
                        Ok(whole_file) => {
                            let v = cmd_stack.len();
                            for (line_num, line) in whole_file.lines().enumerate() {
                                cmd_stack.push((
                                    line.to_string(),
                                    Some((strings[1].clone(), line_num + 1)),
                                ));
                            }
                            cmd_stack[v..].reverse();
                        }
                        Err(err) => {
                            println!("cannot open file: {:?}", err);
                        }
                    }
                } else {
                    println!("need another arg");
                }
            }
            _ => {
                let (origin, direction, word) = match parse_play(&strings.join(" ")) {
                    Ok(x) => x,
                    Err(err) => {
                        println!("{}, help for help", err);
                        continue;
                    }
                };
                let turn = game_state.turn;
                match game_state.play(origin, direction, &word, &word_list) {
                    Ok(scored) => {
                        println!(
                            "Player {} adds {} to score, new score = {}",
                            turn + 1,
                            scored.total(),
                            game_state.players[turn as usize].score
                        );
                        last_plays.clear();
                        print_turn(&game_state);
                    }
                    Err(err) => {
                        println!("{}", err);
                    }
                }
            }
        }
    }

    display::print_board(&game_state.board);
    println!("Game over");
    let winners = game_state.winners();
    for (i, player) in game_state.players.iter().enumerate() {
        println!(
            "Player {}: {}{}",
            i + 1,
            player.score,
            if winners.contains(&i) { " (winner)" } else { "" }
        );
    }
    Ok(())
}
