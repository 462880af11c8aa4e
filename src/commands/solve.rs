//! Phrase solving command
//!
//! Plays one full round against a known hidden phrase and records every turn.

use crate::core::{GuessedSet, Pattern, PatternError};
use crate::solver::Guesser;

/// Default number of wrong guesses allowed
pub const DEFAULT_MAX_GUESSES: u32 = 6;

/// Configuration for solving a phrase
pub struct SolveConfig {
    pub phrase: String,
    pub max_guesses: u32,
    /// Starting pattern; the fully masked phrase when `None`
    pub start: Option<Pattern>,
    /// Letters already tried before the round starts
    pub guessed: GuessedSet,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(phrase: String) -> Self {
        Self {
            phrase,
            max_guesses: DEFAULT_MAX_GUESSES,
            start: None,
            guessed: GuessedSet::new(),
        }
    }

    /// Resume from a partially played state
    #[must_use]
    pub fn with_start(mut self, pattern: Pattern, guessed: GuessedSet) -> Self {
        self.start = Some(pattern);
        self.guessed = guessed;
        self
    }
}

/// Final outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Success,
    Failed,
}

impl RoundStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// A single turn of the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Pattern after this turn's reveal
    pub pattern: Pattern,
    pub guess: u8,
    /// Guesses remaining after this turn
    pub remaining: u32,
    pub hit: bool,
}

/// Result of solving a phrase
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub phrase: String,
    pub trace: Vec<TurnRecord>,
    pub final_pattern: Pattern,
    pub status: RoundStatus,
    /// The guesser ran out of letters before the round ended
    pub reset: bool,
}

impl SolveResult {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.trace.len()
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.trace.iter().filter(|t| !t.hit).count()
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.status == RoundStatus::Success
    }
}

/// Play a round against `config.phrase` with the given guesser
///
/// Each turn the guess is added to the guessed set; a letter in the phrase is
/// revealed everywhere it occurs, anything else costs one remaining guess. A
/// repeated letter counts as a miss, so a round always ends within
/// `max_guesses + phrase length` turns.
///
/// # Errors
///
/// Returns an error if the phrase is not letters and spaces, if the starting
/// pattern does not line up with it, or if a starting guessed letter occurs in
/// the phrase without being revealed.
pub fn solve_phrase<G: Guesser + ?Sized>(
    config: &SolveConfig,
    guesser: &G,
) -> Result<SolveResult, PatternError> {
    let phrase = Pattern::parse_phrase(&config.phrase)?;
    let mut pattern = match &config.start {
        Some(start) => {
            start.check_phrase(&phrase)?;
            start.check_guessed(&phrase, config.guessed)?;
            start.clone()
        }
        None => Pattern::masked(&config.phrase)?,
    };

    let mut guessed = config.guessed;
    let mut remaining = config.max_guesses;
    let mut trace = Vec::new();
    let mut reset = false;

    while pattern.has_blanks() && remaining > 0 {
        let Some(letter) = guesser.next_guess(&pattern, guessed, remaining).letter() else {
            reset = true;
            break;
        };

        let hit = guessed.insert(letter) && phrase.contains(&letter);
        if hit {
            pattern.reveal(&phrase, letter);
        } else {
            remaining -= 1;
        }

        log::debug!(
            "{}: guess '{}' {} -> {pattern} ({remaining} left)",
            config.phrase,
            letter as char,
            if hit { "hit" } else { "miss" }
        );

        trace.push(TurnRecord {
            pattern: pattern.clone(),
            guess: letter,
            remaining,
            hit,
        });
    }

    let status = if pattern.has_blanks() {
        RoundStatus::Failed
    } else {
        RoundStatus::Success
    };

    Ok(SolveResult {
        phrase: String::from_utf8_lossy(&phrase).into_owned(),
        trace,
        final_pattern: pattern,
        status,
        reset,
    })
}
