// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig {
    alphabet: &'static alphabet::Alphabet,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    num_players: u8,
    num_passes_to_end: u8,
}

pub enum GameConfig {
    Static(StaticGameConfig),
}

impl GameConfig {
    #[inline(always)]
    pub fn alphabet(&self) -> &'static alphabet::Alphabet {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    // consecutive passes, counted over all players.
    #[inline(always)]
    pub fn num_passes_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_passes_to_end,
        }
    }
}

pub fn make_english_game_config_with_layout(
    num_players: u8,
    board_layout: board_layout::BoardLayout,
) -> GameConfig {
    assert!(num_players >= 1, "need at least one player");
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout,
        rack_size: 7,
        num_players,
        num_passes_to_end: num_players,
    })
}

pub fn make_common_english_game_config(num_players: u8) -> GameConfig {
    make_english_game_config_with_layout(num_players, board_layout::make_standard_board_layout())
}
