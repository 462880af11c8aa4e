//! Hangman Solver
//!
//! Picks the next letter for a Hangman word or phrase by partitioning
//! dictionary candidates, blending the result with letter, positional and
//! bigram priors, and falling back to prior-only scoring when a slot is out of
//! vocabulary.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{GuessedSet, Pattern};
//! use hangman_solver::solver::{Guess, Guesser, Solver, SolverContext};
//!
//! let context = SolverContext::from_words(["cat", "car", "can"]);
//! let solver = Solver::new(&context);
//!
//! let pattern = Pattern::parse("c__").unwrap();
//! let guess = solver.next_guess(&pattern, GuessedSet::new(), 6);
//! assert_eq!(guess, Guess::Letter(b'n'));
//! ```

// Core domain types
pub mod core;

// Guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
