// Copyright (C) 2020-2026 Andy Kurnia.

// Letters are stored as ASCII upper case bytes b'A'..=b'Z' everywhere.
// Tallies index them 0..26.

pub const NUM_LETTERS: usize = 26;

pub type Tally = [u8; NUM_LETTERS];

#[inline(always)]
pub fn is_letter(letter: u8) -> bool {
    letter.is_ascii_uppercase()
}

#[inline(always)]
pub fn index_of(letter: u8) -> usize {
    (letter - b'A') as usize
}

#[inline(always)]
pub fn letter_at(idx: usize) -> u8 {
    b'A' + idx as u8
}

pub fn tally_of(word: &[u8]) -> Tally {
    let mut tally = [0u8; NUM_LETTERS];
    for &letter in word {
        tally[index_of(letter)] += 1;
    }
    tally
}

pub struct LetterInfo {
    freq: u8,
    score: i8,
}

pub struct Alphabet {
    blank: LetterInfo,
    letters: [LetterInfo; NUM_LETTERS],
}

impl Alphabet {
    #[inline(always)]
    pub fn score(&self, letter: u8) -> i8 {
        self.letters[index_of(letter)].score
    }

    #[inline(always)]
    pub fn freq(&self, letter: u8) -> u8 {
        self.letters[index_of(letter)].freq
    }

    #[inline(always)]
    pub fn blank_freq(&self) -> u8 {
        self.blank.freq
    }

    pub fn num_tiles(&self) -> u16 {
        self.letters.iter().map(|x| x.freq as u16).sum::<u16>() + self.blank.freq as u16
    }
}

const fn info(freq: u8, score: i8) -> LetterInfo {
    LetterInfo { freq, score }
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet {
    // blanks score nothing whatever letter they play as.
    blank: info(2, 0),
    letters: [
        info(9, 1),   // A
        info(2, 3),   // B
        info(2, 3),   // C
        info(4, 2),   // D
        info(12, 1),  // E
        info(2, 4),   // F
        info(3, 2),   // G
        info(2, 4),   // H
        info(9, 1),   // I
        info(1, 8),   // J
        info(1, 5),   // K
        info(4, 1),   // L
        info(2, 3),   // M
        info(6, 1),   // N
        info(8, 1),   // O
        info(2, 3),   // P
        info(1, 10),  // Q
        info(6, 1),   // R
        info(4, 1),   // S
        info(6, 1),   // T
        info(4, 1),   // U
        info(2, 4),   // V
        info(2, 4),   // W
        info(1, 8),   // X
        info(2, 4),   // Y
        info(1, 10),  // Z
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_distribution() {
        assert_eq!(ENGLISH_ALPHABET.num_tiles(), 100);
        assert_eq!(ENGLISH_ALPHABET.score(b'Q'), 10);
        assert_eq!(ENGLISH_ALPHABET.score(b'C'), 3);
        assert_eq!(ENGLISH_ALPHABET.freq(b'E'), 12);
        assert_eq!(ENGLISH_ALPHABET.blank_freq(), 2);
    }

    #[test]
    fn tally_counts_repeats() {
        let tally = tally_of(b"BANANA");
        assert_eq!(tally[index_of(b'A')], 3);
        assert_eq!(tally[index_of(b'N')], 2);
        assert_eq!(tally[index_of(b'B')], 1);
        assert_eq!(tally.iter().map(|&x| x as usize).sum::<usize>(), 6);
        assert_eq!(letter_at(25), b'Z');
    }
}
