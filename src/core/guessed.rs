//! Set of letters already tried in a game

use super::letter::{self, ALPHABET_SIZE};
use std::fmt;

/// Letters already guessed, stored as a 26-bit mask
///
/// Only membership matters; insertion order is not kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GuessedSet(u32);

impl GuessedSet {
    const FULL: u32 = (1 << ALPHABET_SIZE) - 1;

    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set from raw request entries
    ///
    /// Each entry is trimmed and lowercased; anything that is not a single
    /// ASCII letter is ignored.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::GuessedSet;
    ///
    /// let guessed = GuessedSet::from_entries(["A", " e ", "ab", "1", ""]);
    /// assert!(guessed.contains(b'a'));
    /// assert!(guessed.contains(b'e'));
    /// assert_eq!(guessed.len(), 2);
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for entry in entries {
            let trimmed = entry.as_ref().trim();
            let mut bytes = trimmed.bytes();
            if let (Some(byte), None) = (bytes.next(), bytes.next()) {
                let lower = byte.to_ascii_lowercase();
                if letter::is_letter(lower) {
                    set.insert(lower);
                }
            }
        }
        set
    }

    /// Add a letter; returns `false` if it was already present
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = 1 << letter::index(letter);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter::index(letter)) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True once all 26 letters have been tried
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL
    }

    /// Letters in `self` but not in `other`
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if any letter of `word` is in the set
    #[must_use]
    pub fn intersects_word(self, word: &[u8]) -> bool {
        self.0 != 0 && word.iter().any(|&b| self.contains(b))
    }

    /// Letters not yet guessed, in alphabetical order
    pub fn remaining(self) -> impl Iterator<Item = u8> {
        letter::alphabet().filter(move |&l| !self.contains(l))
    }

    /// Guessed letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        letter::alphabet().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for GuessedSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for GuessedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
