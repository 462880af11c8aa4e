//! Benchmark command
//!
//! Plays a full round for every phrase of a test set and summarizes the
//! outcome.

use super::solve::{SolveConfig, SolveResult, solve_phrase};
use crate::solver::Guesser;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_phrases: usize,
    pub successes: usize,
    pub failures: usize,
    /// Rounds where the guesser ran out of letters
    pub resets: usize,
    pub success_rate: f64,
    pub average_guesses: f64,
    pub average_wrong_guesses: f64,
    /// Wrong guesses per round -> number of rounds
    pub wrong_distribution: BTreeMap<usize, usize>,
    pub failed_phrases: Vec<String>,
    pub duration: Duration,
    pub phrases_per_second: f64,
}

/// Run the guesser against every phrase in parallel
///
/// Phrases that are not letters and spaces are skipped with a warning.
pub fn run_benchmark<G: Guesser + Sync>(
    guesser: &G,
    phrases: &[String],
    max_guesses: u32,
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();

    let results: Vec<SolveResult> = phrases
        .par_iter()
        .filter_map(|phrase| {
            let mut config = SolveConfig::new(phrase.clone());
            config.max_guesses = max_guesses;
            let result = solve_phrase(&config, guesser);
            progress.inc(1);
            match result {
                Ok(r) => Some(r),
                Err(e) => {
                    log::warn!("Skipping phrase {phrase:?}: {e}");
                    None
                }
            }
        })
        .collect();

    progress.finish_with_message("Complete!");
    summarize(&results, start.elapsed())
}

/// Aggregate per-round results
#[must_use]
pub fn summarize(results: &[SolveResult], duration: Duration) -> BenchmarkResult {
    let total_phrases = results.len();
    let successes = results.iter().filter(|r| r.success()).count();
    let resets = results.iter().filter(|r| r.reset).count();

    let mut wrong_distribution = BTreeMap::new();
    for r in results {
        *wrong_distribution.entry(r.wrong_guesses()).or_insert(0) += 1;
    }

    let failed_phrases = results
        .iter()
        .filter(|r| !r.success())
        .map(|r| r.phrase.clone())
        .collect();

    let mean = |total: usize| {
        if total_phrases == 0 {
            0.0
        } else {
            total as f64 / total_phrases as f64
        }
    };

    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_phrases,
        successes,
        failures: total_phrases - successes,
        resets,
        success_rate: mean(successes),
        average_guesses: mean(results.iter().map(SolveResult::num_guesses).sum()),
        average_wrong_guesses: mean(results.iter().map(SolveResult::wrong_guesses).sum()),
        wrong_distribution,
        failed_phrases,
        duration,
        phrases_per_second: if secs > 0.0 {
            total_phrases as f64 / secs
        } else {
            0.0
        },
    }
}
