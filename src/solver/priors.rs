//! Letter frequency priors built from the lexicon
//!
//! Four tables, each normalized per conditioning key:
//! - global letter frequency
//! - positional frequency keyed by (word length, index)
//! - left bigram: previous letter (or start of word) → letter
//! - right bigram: letter → next letter (or end of word)
//!
//! Every query returns 0.0 for a key that never occurred.

use crate::core::letter::{self, ALPHABET_SIZE};
use crate::core::{Lexicon, Neighbor};
use rustc_hash::FxHashMap;

/// One distribution over the 26 letters
type LetterRow = [f64; ALPHABET_SIZE];

/// Row/column reserved for the word boundary in the bigram tables
const BOUNDARY: usize = ALPHABET_SIZE;

/// Immutable prior tables
#[derive(Debug, Clone)]
pub struct PriorModel {
    letter: LetterRow,
    positional: FxHashMap<(usize, usize), LetterRow>,
    /// `left[prev][letter]`, `prev == BOUNDARY` for the start of a word
    left: [LetterRow; ALPHABET_SIZE + 1],
    /// `right[letter][next]`, `next == BOUNDARY` for the end of a word
    right: [[f64; ALPHABET_SIZE + 1]; ALPHABET_SIZE],
}

impl PriorModel {
    /// Count every character of every lexicon word, then normalize
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut letter = [0.0; ALPHABET_SIZE];
        let mut positional: FxHashMap<(usize, usize), LetterRow> = FxHashMap::default();
        let mut left = [[0.0; ALPHABET_SIZE]; ALPHABET_SIZE + 1];
        let mut right = [[0.0; ALPHABET_SIZE + 1]; ALPHABET_SIZE];

        for word in lexicon.iter() {
            let bytes = word.as_bytes();
            let len = bytes.len();
            for (i, &ch) in bytes.iter().enumerate() {
                let c = letter::index(ch);
                letter[c] += 1.0;
                positional.entry((len, i)).or_insert([0.0; ALPHABET_SIZE])[c] += 1.0;

                let prev = i.checked_sub(1).map_or(BOUNDARY, |p| letter::index(bytes[p]));
                left[prev][c] += 1.0;

                let next = bytes.get(i + 1).map_or(BOUNDARY, |&n| letter::index(n));
                right[c][next] += 1.0;
            }
        }

        normalize(&mut letter);
        positional.values_mut().for_each(|row| normalize(row));
        left.iter_mut().for_each(|row| normalize(row));
        right.iter_mut().for_each(|row| normalize(row));

        Self {
            letter,
            positional,
            left,
            right,
        }
    }

    /// P(letter) over all lexicon characters
    #[inline]
    #[must_use]
    pub fn letter(&self, letter: u8) -> f64 {
        self.letter[letter::index(letter)]
    }

    /// P(letter | word length, index)
    #[inline]
    #[must_use]
    pub fn positional(&self, len: usize, index: usize, letter: u8) -> f64 {
        self.positional
            .get(&(len, index))
            .map_or(0.0, |row| row[letter::index(letter)])
    }

    /// P(letter | previous letter or start of word)
    #[inline]
    #[must_use]
    pub fn left_bigram(&self, prev: Neighbor, letter: u8) -> f64 {
        self.left[context_index(prev)][letter::index(letter)]
    }

    /// P(next letter or end of word | letter)
    #[inline]
    #[must_use]
    pub fn right_bigram(&self, letter: u8, next: Neighbor) -> f64 {
        self.right[letter::index(letter)][context_index(next)]
    }
}

const fn context_index(neighbor: Neighbor) -> usize {
    match neighbor {
        Neighbor::Letter(c) => letter::index(c),
        Neighbor::Boundary => BOUNDARY,
    }
}

/// Divide a row of counts by its total
///
/// An empty row is divided by a placeholder total of 1 and stays all zero.
fn normalize(row: &mut [f64]) {
    let total: f64 = row.iter().sum();
    let total = if total > 0.0 { total } else { 1.0 };
    for value in row {
        *value /= total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn tiny() -> PriorModel {
        PriorModel::build(&Lexicon::new(["cat", "car", "can"]))
    }

    #[test]
    fn letter_prior_counts_every_character() {
        let priors = tiny();
        assert!(approx(priors.letter(b'c'), 3.0 / 9.0));
        assert!(approx(priors.letter(b'a'), 3.0 / 9.0));
        assert!(approx(priors.letter(b't'), 1.0 / 9.0));
        assert!(approx(priors.letter(b'z'), 0.0));

        let total: f64 = letter::alphabet().map(|l| priors.letter(l)).sum();
        assert!(approx(total, 1.0));
    }

    #[test]
    fn positional_prior_per_length_and_index() {
        let priors = tiny();
        assert!(approx(priors.positional(3, 0, b'c'), 1.0));
        assert!(approx(priors.positional(3, 2, b'n'), 1.0 / 3.0));
        assert!(approx(priors.positional(3, 2, b'c'), 0.0));
        // Unseen length and index
        assert!(approx(priors.positional(7, 0, b'c'), 0.0));
        assert!(approx(priors.positional(3, 5, b'c'), 0.0));
    }

    #[test]
    fn bigrams_use_boundaries() {
        let priors = tiny();
        assert!(approx(priors.left_bigram(Neighbor::Boundary, b'c'), 1.0));
        assert!(approx(priors.left_bigram(Neighbor::Letter(b'c'), b'a'), 1.0));
        assert!(approx(priors.left_bigram(Neighbor::Letter(b'a'), b'r'), 1.0 / 3.0));
        assert!(approx(priors.right_bigram(b't', Neighbor::Boundary), 1.0));
        assert!(approx(priors.right_bigram(b'a', Neighbor::Letter(b'n')), 1.0 / 3.0));
        assert!(approx(priors.right_bigram(b'a', Neighbor::Boundary), 0.0));
    }

    #[test]
    fn unseen_conditioning_keys_are_zero() {
        let priors = tiny();
        assert!(approx(priors.left_bigram(Neighbor::Letter(b'q'), b'u'), 0.0));
        assert!(approx(priors.right_bigram(b'q', Neighbor::Letter(b'u')), 0.0));
    }

    #[test]
    fn empty_lexicon_builds_zero_tables() {
        let priors = PriorModel::build(&Lexicon::default());
        for l in letter::alphabet() {
            assert!(approx(priors.letter(l), 0.0));
            assert!(approx(priors.left_bigram(Neighbor::Boundary, l), 0.0));
        }
    }

    #[test]
    fn rows_sum_to_one() {
        let priors = PriorModel::build(&Lexicon::new(["runway", "route", "radar", "ramp"]));
        let start: f64 = letter::alphabet()
            .map(|l| priors.left_bigram(Neighbor::Boundary, l))
            .sum();
        assert!(approx(start, 1.0));

        let after_a: f64 = letter::alphabet()
            .map(|l| priors.right_bigram(b'a', Neighbor::Letter(l)))
            .sum::<f64>()
            + priors.right_bigram(b'a', Neighbor::Boundary);
        assert!(approx(after_a, 1.0));
    }
}
