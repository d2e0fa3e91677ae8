// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// Words bucketed by length, each bucket sorted, with a letter tally per word
// in the same order. The tallies let movegen reject most words in O(26).
pub struct WordList {
    words_by_len: Box<[Box<[Box<[u8]>]>]>,
    tallies_by_len: Box<[Box<[alphabet::Tally]>]>,
    num_words: usize,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> error::Returns<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut machine_words = Vec::<Box<[u8]>>::new();
        for (line_num, word) in (1usize..).zip(words) {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let mut v = Vec::with_capacity(word.len());
            for c in word.chars() {
                let c = c.to_ascii_uppercase();
                if !c.is_ascii_uppercase() {
                    return_error!(format!(
                        "invalid letter {:?} in {:?} (word {})",
                        c, word, line_num
                    ));
                }
                v.push(c as u8);
            }
            if v.len() > i8::MAX as usize {
                return_error!(format!("word {} is too long: {:?}", line_num, word));
            }
            machine_words.push(v.into_boxed_slice());
        }
        machine_words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        machine_words.dedup();

        let max_len = machine_words.last().map_or(0, |word| word.len());
        let mut words_by_len = vec![Vec::new(); max_len + 1];
        for word in machine_words.iter() {
            words_by_len[word.len()].push(word.clone());
        }
        let tallies_by_len = words_by_len
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|word| alphabet::tally_of(word))
                    .collect::<Box<_>>()
            })
            .collect::<Box<_>>();
        log::debug!(
            "word list: {} words, longest {}",
            machine_words.len(),
            max_len
        );
        Ok(Self {
            words_by_len: words_by_len
                .into_iter()
                .map(|words| words.into_boxed_slice())
                .collect(),
            tallies_by_len,
            num_words: machine_words.len(),
        })
    }

    // one word per line.
    pub fn from_text(giant_string: &str) -> error::Returns<Self> {
        Self::from_words(giant_string.lines())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    // 0 when there are no words.
    #[inline(always)]
    pub fn max_len(&self) -> usize {
        self.words_by_len.len() - 1
    }

    #[inline(always)]
    pub fn words_of_len(&self, len: usize) -> &[Box<[u8]>] {
        match self.words_by_len.get(len) {
            Some(words) => words,
            None => &[],
        }
    }

    #[inline(always)]
    pub fn tallies_of_len(&self, len: usize) -> &[alphabet::Tally] {
        match self.tallies_by_len.get(len) {
            Some(tallies) => tallies,
            None => &[],
        }
    }

    // exact membership, any length.
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words_of_len(word.len())
            .binary_search_by(|probe| probe[..].cmp(word))
            .is_ok()
    }
}
