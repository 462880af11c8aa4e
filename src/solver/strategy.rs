//! Guess selection strategies
//!
//! Defines the `Guesser` trait and the simple baseline strategy.

use super::Solver;
use crate::core::{GuessedSet, Pattern, letter};

/// Outcome of asking for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// Play this letter
    Letter(u8),
    /// Every letter has been tried; the game must be reset
    Reset,
}

/// Wire status of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    Playing,
    Reset,
}

impl GuessStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Reset => "reset",
        }
    }
}

impl Guess {
    /// The guessed letter, if any
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Letter(l) => Some(l),
            Self::Reset => None,
        }
    }

    #[must_use]
    pub const fn status(self) -> GuessStatus {
        match self {
            Self::Letter(_) => GuessStatus::Playing,
            Self::Reset => GuessStatus::Reset,
        }
    }
}

/// A strategy for choosing the next letter
///
/// Implementations must be pure over their inputs: the same pattern, guessed
/// set and remaining count always give the same guess.
pub trait Guesser {
    fn next_guess(&self, pattern: &Pattern, guessed: GuessedSet, remaining: u32) -> Guess;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Candidate partitioning blended with priors (default)
    Blended(Solver<'a>),
    /// Fixed English letter-frequency order, ignoring the pattern
    Static(StaticOrderGuesser),
}

impl Guesser for StrategyType<'_> {
    fn next_guess(&self, pattern: &Pattern, guessed: GuessedSet, remaining: u32) -> Guess {
        match self {
            Self::Blended(s) => s.next_guess(pattern, guessed, remaining),
            Self::Static(s) => s.next_guess(pattern, guessed, remaining),
        }
    }
}

impl<'a> StrategyType<'a> {
    /// Create strategy from name string
    ///
    /// Supported names: "blended", "static". Defaults to blended if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, solver: Solver<'a>) -> Self {
        match name {
            "static" | "frequency" => Self::Static(StaticOrderGuesser),
            _ => Self::Blended(solver),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blended(_) => "blended",
            Self::Static(_) => "static",
        }
    }
}

/// Baseline strategy
///
/// Guesses letters in descending English frequency order. Useful as a
/// benchmark floor.
pub struct StaticOrderGuesser;

impl Guesser for StaticOrderGuesser {
    fn next_guess(&self, _pattern: &Pattern, guessed: GuessedSet, _remaining: u32) -> Guess {
        static_choice(guessed).map_or(Guess::Reset, Guess::Letter)
    }
}

/// First un-guessed letter in static frequency order
#[must_use]
pub fn static_choice(guessed: GuessedSet) -> Option<u8> {
    letter::FREQUENCY_ORDER
        .iter()
        .copied()
        .find(|&l| !guessed.contains(l))
}

/// Highest-scoring letter, ties going to the earliest letter yielded
///
/// Callers yield letters alphabetically, which makes the tie-break
/// alphabetical.
pub(crate) fn best_letter<I: IntoIterator<Item = (u8, f64)>>(scored: I) -> Option<u8> {
    let mut best: Option<(u8, f64)> = None;
    for (letter, score) in scored {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((letter, score));
        }
    }
    best.map(|(letter, _)| letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_status_strings() {
        assert_eq!(Guess::Letter(b'e').status().as_str(), "playing");
        assert_eq!(Guess::Reset.status().as_str(), "reset");
        assert_eq!(Guess::Letter(b'e').letter(), Some(b'e'));
        assert_eq!(Guess::Reset.letter(), None);
    }

    #[test]
    fn static_order_skips_guessed() {
        let guessed: GuessedSet = b"eta".iter().copied().collect();
        assert_eq!(static_choice(guessed), Some(b'o'));

        let pattern = Pattern::parse("___").unwrap();
        assert_eq!(
            StaticOrderGuesser.next_guess(&pattern, guessed, 6),
            Guess::Letter(b'o')
        );
    }

    #[test]
    fn static_order_resets_when_exhausted() {
        let guessed: GuessedSet = letter::alphabet().collect();
        let pattern = Pattern::parse("___").unwrap();
        assert_eq!(static_choice(guessed), None);
        assert_eq!(StaticOrderGuesser.next_guess(&pattern, guessed, 6), Guess::Reset);
    }

    #[test]
    fn static_order_reaches_every_letter() {
        let all_but_j: GuessedSet = letter::alphabet().filter(|&l| l != b'j').collect();
        assert_eq!(static_choice(all_but_j), Some(b'j'));
    }

    #[test]
    fn best_letter_prefers_first_on_ties() {
        assert_eq!(best_letter([(b'n', 0.5), (b'r', 0.5), (b't', 0.5)]), Some(b'n'));
        assert_eq!(best_letter([(b'a', 0.1), (b'b', 0.7), (b'c', 0.7)]), Some(b'b'));
        assert_eq!(best_letter(std::iter::empty()), None);
    }
}
