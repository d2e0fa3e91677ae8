// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, error, game_config, lexicon, matrix, movegen, play_scorer, tile};
use rand::prelude::*;

#[derive(Clone)]
pub struct GamePlayer {
    pub score: i32,
    pub rack: Vec<tile::Tile>,
}

pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    pub num_passes: u8,
}

impl<'a> Clone for GameState<'a> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            game_config: self.game_config,
            players: self.players.clone(),
            board: self.board.clone(),
            bag: self.bag.clone(),
            turn: self.turn,
            num_passes: self.num_passes,
        }
    }
}

impl<'a> GameState<'a> {
    // Shuffles a full bag and deals every rack in turn order.
    pub fn new(game_config: &'a game_config::GameConfig, rng: &mut dyn RngCore) -> Self {
        let rack_size = game_config.rack_size() as usize;
        let mut bag = bag::Bag::new(game_config.alphabet());
        bag.shuffle(rng);
        let players = (0..game_config.num_players())
            .map(|_| {
                let mut rack = Vec::with_capacity(rack_size);
                bag.replenish(&mut rack, rack_size);
                GamePlayer { score: 0, rack }
            })
            .collect();
        Self {
            game_config,
            players,
            board: board::Board::new(game_config.board_layout().clone()),
            bag,
            turn: 0,
            num_passes: 0,
        }
    }

    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn board_snapshot<'b>(&'b self, word_list: &'b lexicon::WordList) -> movegen::BoardSnapshot<'b> {
        movegen::BoardSnapshot {
            board: &self.board,
            word_list,
        }
    }

    // Scores the play for the current player and commits it. Nothing changes
    // unless the play is accepted. Blanks get their letter as they land.
    pub fn play(
        &mut self,
        origin: matrix::RowCol,
        direction: matrix::Direction,
        word: &[u8],
        word_list: &lexicon::WordList,
    ) -> error::Returns<play_scorer::ScoredPlay> {
        if !word_list.contains(word) {
            return_error!(format!("{} is not a word", String::from_utf8_lossy(word)));
        }
        if !self.board.span_fits(origin, direction, word.len()) {
            return_error!(format!(
                "{} does not fit at {}",
                String::from_utf8_lossy(word),
                origin
            ));
        }
        let turn = self.turn as usize;
        let scored = play_scorer::score_play(
            &self.board,
            origin,
            direction,
            word,
            &self.players[turn].rack,
            word_list,
        )?;

        let player = &mut self.players[turn];
        let mut remaining = scored.used_tiles;
        let mut placements = Vec::with_capacity(scored.num_tiles_used() as usize);
        for (i, &letter) in (0i8..).zip(word.iter()) {
            let pos = origin.offset(direction, i);
            if self.board.is_occupied(pos) {
                continue;
            }
            let j = play_scorer::pick_rack_tile(&player.rack, !remaining, letter)
                .ok_or("rack does not cover the play")?;
            remaining &= !(1 << j);
            placements.push((pos, player.rack[j].assign(letter)?));
        }
        for (pos, placed_tile) in placements {
            self.board.place(pos, placed_tile)?;
        }
        player.rack = (0..)
            .zip(player.rack.iter())
            .filter(|&(j, _)| scored.used_tiles & (1 << j) == 0)
            .map(|(_, &t)| t)
            .collect();
        player.score += scored.total();
        self.bag
            .replenish(&mut player.rack, self.game_config.rack_size() as usize);
        log::debug!(
            "player {} played {} at {} {:?} for {}",
            turn + 1,
            String::from_utf8_lossy(word),
            origin,
            direction,
            scored.total()
        );
        self.num_passes = 0;
        self.next_turn();
        Ok(scored)
    }

    pub fn pass(&mut self) {
        self.num_passes += 1;
        log::debug!("player {} passed ({} in a row)", self.turn + 1, self.num_passes);
        self.next_turn();
    }

    // The whole rack goes back before redrawing, so the same tiles may return.
    pub fn exchange_rack(&mut self, rng: &mut dyn RngCore) {
        let player = &mut self.players[self.turn as usize];
        let old_rack = std::mem::take(&mut player.rack);
        self.bag.put_back(rng, &old_rack);
        self.bag
            .replenish(&mut player.rack, self.game_config.rack_size() as usize);
        log::debug!("player {} exchanged {} tiles", self.turn + 1, old_rack.len());
        self.num_passes = 0;
        self.next_turn();
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        if self.turn >= num_players {
            self.turn = 0;
        }
    }

    #[inline(always)]
    pub fn is_over(&self) -> bool {
        self.num_passes >= self.game_config.num_passes_to_end()
    }

    // indexes of the players sharing the top score.
    pub fn winners(&self) -> Vec<usize> {
        let best = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        (0..self.players.len())
            .filter(|&i| self.players[i].score == best)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;
    use crate::matrix::{Direction, RowCol};
    use crate::tile::Tile;
    use rand_chacha::ChaCha20Rng;

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
        lexicon::WordList::from_words(["AT", "CAT", "CATS", "TAX", "SCAT"]).unwrap()
    }

    fn total_tiles(game_state: &GameState) -> usize {
        game_state.bag.len()
            + game_state.board.num_tiles()
            + game_state.players.iter().map(|p| p.rack.len()).sum::<usize>()
    }

    #[test]
    fn new_game_deals_every_rack() {
        let game_config = game_config::make_common_english_game_config(3);
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let game_state = GameState::new(&game_config, &mut rng);
        assert!(game_state.players.iter().all(|p| p.rack.len() == 7));
        assert_eq!(game_state.bag.len(), 100 - 21);
        assert_eq!(game_state.turn, 0);
        assert!(!game_state.is_over());
    }

    #[test]
    fn play_commits_tiles_and_refills() {
        let game_config = game_config::make_common_english_game_config(2);
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut game_state = GameState::new(&game_config, &mut rng);
        game_state.players[0].rack = rack("?ATQQQQ");
        let before = total_tiles(&game_state);
        let scored = game_state
            .play(RowCol::new(7, 6), Direction::Across, b"CAT", &words())
            .unwrap();
        // blank C scores nothing, A and T doubled by the center.
        assert_eq!(scored.total(), 4);
        assert_eq!(game_state.players[0].score, 4);
        assert_eq!(game_state.board.rows_text()[7], "......cAT......");
        assert_eq!(game_state.board.tile_at(RowCol::new(7, 6)), Some(Tile::Blank { letter: Some(b'C') }));
        assert_eq!(game_state.players[0].rack.len(), 7);
        assert!(game_state.players[0].rack.iter().filter(|t| t.letter() == Some(b'Q')).count() >= 4);
        assert_eq!(total_tiles(&game_state), before);
        assert_eq!(game_state.turn, 1);
    }

    #[test]
    fn rejected_play_changes_nothing() {
        let game_config = game_config::make_common_english_game_config(2);
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut game_state = GameState::new(&game_config, &mut rng);
        game_state.players[0].rack = rack("CATSXYZ");
        let rack_before = game_state.players[0].rack.clone();
        let err = game_state
            .play(RowCol::new(0, 0), Direction::Across, b"CAT", &words())
            .unwrap_err();
        assert_eq!(err.to_string(), play_scorer::Rejection::NotConnected.to_string());
        assert!(game_state.play(RowCol::new(7, 7), Direction::Across, b"ZZZ", &words()).is_err());
        assert!(game_state.play(RowCol::new(7, 13), Direction::Across, b"CAT", &words()).is_err());
        assert!(game_state.board.is_empty());
        assert_eq!(game_state.players[0].rack, rack_before);
        assert_eq!(game_state.turn, 0);
    }

    #[test]
    fn passes_end_the_game() {
        let game_config = game_config::make_common_english_game_config(2);
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut game_state = GameState::new(&game_config, &mut rng);
        game_state.pass();
        assert!(!game_state.is_over());
        game_state.exchange_rack(&mut rng);
        assert_eq!(game_state.num_passes, 0);
        assert_eq!(game_state.players[1].rack.len(), 7);
        assert_eq!(total_tiles(&game_state), 100);
        game_state.pass();
        game_state.pass();
        assert!(game_state.is_over());
        assert_eq!(game_state.winners(), vec![0, 1]);
    }
}
