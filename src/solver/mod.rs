//! Hangman guess selection
//!
//! This module contains the candidate filter, the prior tables, the letter
//! scorers and the solver that chains them into a fallback cascade.

pub mod affix;
mod context;
pub mod eig;
mod engine;
pub mod filter;
pub mod oov;
pub mod priors;
pub mod strategy;
pub mod weights;

pub use context::SolverContext;
pub use engine::{Decision, Solver, Tier};
pub use priors::PriorModel;
pub use strategy::{Guess, GuessStatus, Guesser, StaticOrderGuesser, StrategyType};
pub use weights::{ScoringWeights, Signals, WeightsError};
