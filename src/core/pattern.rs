//! Phrase pattern representation
//!
//! A pattern is the revealed state of a hidden phrase: each cell is a
//! revealed lowercase letter, the blank marker `_`, or a space. Spaces
//! separate slots (words) and never change.

use super::{GuessedSet, letter};
use std::fmt;

/// Marker for an unrevealed letter
pub const BLANK: u8 = b'_';

/// Slot separator, always passed through unchanged
pub const SPACE: u8 = b' ';

/// Revealed state of a whole phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<u8>,
}

/// Error type for malformed patterns and phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidCharacter(char),
    LengthMismatch { pattern: usize, phrase: usize },
    SpaceMismatch(usize),
    LetterMismatch(usize),
    UnrevealedGuess(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern contains no letters or blanks"),
            Self::InvalidCharacter(c) => write!(f, "Invalid pattern character {c:?}"),
            Self::LengthMismatch { pattern, phrase } => write!(
                f,
                "Pattern length {pattern} does not match phrase length {phrase}"
            ),
            Self::SpaceMismatch(i) => {
                write!(f, "Pattern and phrase disagree on a space at index {i}")
            }
            Self::LetterMismatch(i) => {
                write!(f, "Revealed letter at index {i} does not match the phrase")
            }
            Self::UnrevealedGuess(c) => {
                write!(f, "Guessed letter {c:?} is in the phrase but not revealed")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Parse a pattern such as `"__r_ine"` or `"on ____"`
    ///
    /// Letters are lowercased. Only letters, `_` and spaces are accepted.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern has an invalid character or has
    /// no letters or blanks at all.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::parse("On ____").unwrap();
    /// assert_eq!(pattern.to_string(), "on ____");
    /// assert_eq!(pattern.slots().len(), 2);
    ///
    /// assert!(Pattern::parse("a-b").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let cells = text
            .chars()
            .map(|c| {
                let c = c.to_ascii_lowercase();
                match c {
                    'a'..='z' | '_' | ' ' => Ok(c as u8),
                    _ => Err(PatternError::InvalidCharacter(c)),
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::from_cells(cells)
    }

    /// Fully masked pattern for a hidden phrase (letters become blanks)
    ///
    /// # Errors
    /// Returns `PatternError` if the phrase contains anything other than
    /// letters and spaces, or no letters at all.
    pub fn masked(phrase: &str) -> Result<Self, PatternError> {
        let phrase = Self::parse_phrase(phrase)?;
        let cells = phrase
            .iter()
            .map(|&c| if c == SPACE { SPACE } else { BLANK })
            .collect();
        Self::from_cells(cells)
    }

    /// Normalize a hidden phrase to lowercase bytes
    ///
    /// # Errors
    /// Returns `PatternError` if the phrase contains blanks or any character
    /// other than letters and spaces.
    pub fn parse_phrase(phrase: &str) -> Result<Vec<u8>, PatternError> {
        let bytes = phrase
            .chars()
            .map(|c| {
                let c = c.to_ascii_lowercase();
                match c {
                    'a'..='z' | ' ' => Ok(c as u8),
                    _ => Err(PatternError::InvalidCharacter(c)),
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if bytes.iter().all(|&c| c == SPACE) {
            return Err(PatternError::Empty);
        }
        Ok(bytes)
    }

    fn from_cells(cells: Vec<u8>) -> Result<Self, PatternError> {
        if cells.iter().all(|&c| c == SPACE) {
            return Err(PatternError::Empty);
        }
        Ok(Self { cells })
    }

    /// Raw cells, spaces included
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True while any cell is still blank
    #[must_use]
    pub fn has_blanks(&self) -> bool {
        self.cells.contains(&BLANK)
    }

    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == BLANK).count()
    }

    /// Split into space-delimited slots, skipping empty runs
    #[must_use]
    pub fn slots(&self) -> Vec<Slot<'_>> {
        self.cells
            .split(|&c| c == SPACE)
            .filter(|cells| !cells.is_empty())
            .map(Slot::new)
            .collect()
    }

    /// Check that `phrase` could be the hidden phrase behind this pattern
    ///
    /// Lengths must agree, spaces must line up, and every revealed cell must
    /// hold the phrase's letter.
    ///
    /// # Errors
    /// Returns `PatternError` on a length, space or revealed-letter mismatch.
    pub fn check_phrase(&self, phrase: &[u8]) -> Result<(), PatternError> {
        if phrase.len() != self.cells.len() {
            return Err(PatternError::LengthMismatch {
                pattern: self.cells.len(),
                phrase: phrase.len(),
            });
        }
        for (i, (&cell, &ch)) in self.cells.iter().zip(phrase).enumerate() {
            if (cell == SPACE) != (ch == SPACE) {
                return Err(PatternError::SpaceMismatch(i));
            }
            if letter::is_letter(cell) && cell != ch {
                return Err(PatternError::LetterMismatch(i));
            }
        }
        Ok(())
    }

    /// Check that no guessed letter is hidden behind a blank
    ///
    /// A guessed letter that occurs in the phrase must already be revealed
    /// everywhere it occurs.
    ///
    /// # Errors
    /// Returns `PatternError::UnrevealedGuess` for the first such letter.
    pub fn check_guessed(&self, phrase: &[u8], guessed: GuessedSet) -> Result<(), PatternError> {
        match self
            .cells
            .iter()
            .zip(phrase)
            .find(|&(&cell, &ch)| cell == BLANK && guessed.contains(ch))
        {
            Some((_, &ch)) => Err(PatternError::UnrevealedGuess(ch as char)),
            None => Ok(()),
        }
    }

    /// Reveal `guess` at every blank where the hidden phrase holds it
    ///
    /// Spaces and already revealed cells are never touched, so revealing is
    /// monotonic and idempotent. Returns the number of newly revealed cells.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let mut pattern = Pattern::masked("on time").unwrap();
    /// assert_eq!(pattern.reveal(b"on time", b'o'), 1);
    /// assert_eq!(pattern.reveal(b"on time", b'o'), 0);
    /// assert_eq!(pattern.to_string(), "o_ ____");
    /// ```
    pub fn reveal(&mut self, phrase: &[u8], guess: u8) -> usize {
        let mut revealed = 0;
        for (cell, &hidden) in self.cells.iter_mut().zip(phrase) {
            if *cell == BLANK && hidden == guess {
                *cell = hidden;
                revealed += 1;
            }
        }
        revealed
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cells are ASCII by construction
        f.write_str(&String::from_utf8_lossy(&self.cells))
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Where a blank's neighbor context comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// A revealed letter
    Letter(u8),
    /// Word edge, or a neighboring blank
    Boundary,
}

/// One space-delimited word of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    cells: &'a [u8],
}

impl<'a> Slot<'a> {
    #[must_use]
    pub const fn new(cells: &'a [u8]) -> Self {
        Self { cells }
    }

    /// The slot's literal string, blanks included
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.cells
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn has_blanks(&self) -> bool {
        self.cells.contains(&BLANK)
    }

    /// Indices of the blank cells, left to right
    #[must_use]
    pub fn blank_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == BLANK)
            .map(|(i, _)| i)
            .collect()
    }

    /// Set of letters revealed anywhere in the slot
    #[must_use]
    pub fn revealed(&self) -> GuessedSet {
        self.cells
            .iter()
            .copied()
            .filter(|&c| letter::is_letter(c))
            .collect()
    }

    /// Context to the left of `index`
    #[must_use]
    pub fn left_of(&self, index: usize) -> Neighbor {
        match index.checked_sub(1).map(|i| self.cells[i]) {
            Some(c) if c != BLANK => Neighbor::Letter(c),
            _ => Neighbor::Boundary,
        }
    }

    /// Context to the right of `index`
    #[must_use]
    pub fn right_of(&self, index: usize) -> Neighbor {
        match self.cells.get(index + 1) {
            Some(&c) if c != BLANK => Neighbor::Letter(c),
            _ => Neighbor::Boundary,
        }
    }
}

impl fmt::Display for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_and_keeps_spaces() {
        let pattern = Pattern::parse("A_C __").unwrap();
        assert_eq!(pattern.as_bytes(), b"a_c __");
        assert_eq!(pattern.blank_count(), 3);
        assert!(pattern.has_blanks());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Pattern::parse("ab*"),
            Err(PatternError::InvalidCharacter('*'))
        );
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("   "), Err(PatternError::Empty));
    }

    #[test]
    fn masked_blanks_letters_only() {
        let pattern = Pattern::masked("Base Maintenance").unwrap();
        assert_eq!(pattern.to_string(), "____ ___________");
        assert!(Pattern::masked("jet_bridge").is_err());
    }

    #[test]
    fn slots_split_on_spaces() {
        let pattern = Pattern::parse("o_  ti__ ").unwrap();
        let slots = pattern.slots();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].as_bytes(), b"o_");
        assert_eq!(slots[1].as_bytes(), b"ti__");
        assert_eq!(slots[1].blank_indices(), vec![2, 3]);
    }

    #[test]
    fn reveal_never_touches_spaces_or_revealed_cells() {
        let phrase = b"on time";
        let mut pattern = Pattern::masked("on time").unwrap();

        assert_eq!(pattern.reveal(phrase, b'n'), 1);
        assert_eq!(pattern.reveal(phrase, b' '), 0);
        assert_eq!(pattern.reveal(phrase, b'e'), 1);
        assert_eq!(pattern.to_string(), "_n ___e");

        let before = pattern.clone();
        assert_eq!(pattern.reveal(phrase, b'e'), 0);
        assert_eq!(pattern, before);
    }

    #[test]
    fn reveal_all_occurrences() {
        let phrase = b"baggage";
        let mut pattern = Pattern::masked("baggage").unwrap();
        assert_eq!(pattern.reveal(phrase, b'g'), 3);
        assert_eq!(pattern.to_string(), "__gg_g_");
    }

    #[test]
    fn check_phrase_detects_mismatch() {
        let pattern = Pattern::parse("__ ____").unwrap();
        assert!(pattern.check_phrase(b"on time").is_ok());
        assert_eq!(
            pattern.check_phrase(b"ontime"),
            Err(PatternError::LengthMismatch {
                pattern: 7,
                phrase: 6
            })
        );
        assert_eq!(
            pattern.check_phrase(b"ont ime"),
            Err(PatternError::SpaceMismatch(2))
        );
    }

    #[test]
    fn check_phrase_compares_revealed_letters() {
        let pattern = Pattern::parse("x__").unwrap();
        assert_eq!(
            pattern.check_phrase(b"cat"),
            Err(PatternError::LetterMismatch(0))
        );
        assert!(Pattern::parse("c_t").unwrap().check_phrase(b"cat").is_ok());
    }

    #[test]
    fn check_guessed_rejects_hidden_hits() {
        let pattern = Pattern::parse("c__").unwrap();
        let tried: GuessedSet = b"ce".iter().copied().collect();
        assert!(pattern.check_guessed(b"cat", tried).is_ok());

        let tried: GuessedSet = b"ca".iter().copied().collect();
        assert_eq!(
            pattern.check_guessed(b"cat", tried),
            Err(PatternError::UnrevealedGuess('a'))
        );
    }

    #[test]
    fn neighbors_treat_blanks_as_boundary() {
        let pattern = Pattern::parse("c__t").unwrap();
        let slot = pattern.slots()[0];

        assert_eq!(slot.left_of(0), Neighbor::Boundary);
        assert_eq!(slot.left_of(1), Neighbor::Letter(b'c'));
        assert_eq!(slot.left_of(2), Neighbor::Boundary);
        assert_eq!(slot.right_of(1), Neighbor::Boundary);
        assert_eq!(slot.right_of(2), Neighbor::Letter(b't'));
        assert_eq!(slot.right_of(3), Neighbor::Boundary);
    }

    #[test]
    fn revealed_letters() {
        let pattern = Pattern::parse("t_t_e").unwrap();
        assert_eq!(pattern.slots()[0].revealed().to_string(), "et");
    }
}
