//! Immutable word set used for candidate lookup

use super::letter;
use rustc_hash::FxHashMap;

/// Longest word kept in a lexicon
///
/// Candidate partitioning encodes blank positions in a `u64` mask.
pub const MAX_WORD_LEN: usize = 64;

/// A deduplicated set of lowercase alphabetic words, grouped by length
///
/// Words inside each length group are sorted, so every scan over the lexicon
/// is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    by_length: FxHashMap<usize, Vec<String>>,
    total: usize,
}

impl Lexicon {
    /// Build a lexicon from raw entries
    ///
    /// Entries are trimmed and lowercased. Entries with anything other than
    /// ASCII letters, and entries longer than [`MAX_WORD_LEN`], are skipped.
    /// Duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Lexicon;
    ///
    /// let lexicon = Lexicon::new(["Cat", "cat", "car", "on-time", ""]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("cat"));
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        lexicon.extend(entries);
        lexicon
    }

    /// Merge a general dictionary with a domain word list
    pub fn merged<A, B, S, T>(general: A, domain: B) -> Self
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut lexicon = Self::new(general);
        lexicon.extend(domain);
        lexicon
    }

    fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let word = entry.as_ref().trim().to_ascii_lowercase();
            if word.is_empty()
                || word.len() > MAX_WORD_LEN
                || !word.bytes().all(letter::is_letter)
            {
                continue;
            }
            self.by_length.entry(word.len()).or_default().push(word);
        }

        self.total = 0;
        for words in self.by_length.values_mut() {
            words.sort_unstable();
            words.dedup();
            self.total += words.len();
        }
    }

    /// All words of exactly `len` letters, sorted
    #[must_use]
    pub fn with_length(&self, len: usize) -> &[String] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.with_length(word.len())
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// Iterate every word (grouped by length, in no particular group order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.by_length.values().flatten().map(String::as_str)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
