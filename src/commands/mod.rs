//! Command implementations

pub mod benchmark;
pub mod serve;
pub mod solve;
pub mod tune;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use serve::{handle_line, run_serve};
pub use solve::{
    DEFAULT_MAX_GUESSES, RoundStatus, SolveConfig, SolveResult, TurnRecord, solve_phrase,
};
pub use tune::{TuneConfig, TuneResult, WeightGrid, WeightScore, run_tune, sample_folds};
