//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types: phrase patterns, the
//! guessed-letter set and the lexicon. Everything here is immutable or owned
//! by a single game, with no global state.

mod guessed;
pub mod letter;
mod lexicon;
mod pattern;

pub use guessed::GuessedSet;
pub use lexicon::{Lexicon, MAX_WORD_LEN};
pub use pattern::{BLANK, Neighbor, Pattern, PatternError, SPACE, Slot};
