//! Weight tuning command
//!
//! Grid search over blended scoring weights, evaluated by win rate on seeded
//! random folds of the domain word list.

use super::solve::{SolveConfig, solve_phrase};
use crate::solver::{ScoringWeights, Solver, SolverContext};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rayon::prelude::*;

/// Candidate values for each weight
#[derive(Debug, Clone)]
pub struct WeightGrid {
    pub eig: Vec<f64>,
    pub letter_prior: Vec<f64>,
    pub positional: Vec<f64>,
    pub left_bigram: Vec<f64>,
    pub right_bigram: Vec<f64>,
    pub affix: Vec<f64>,
}

impl Default for WeightGrid {
    fn default() -> Self {
        let minor = vec![0.0, 0.05, 0.15, 0.25];
        Self {
            eig: vec![0.2, 0.3, 0.4, 0.5, 0.6],
            letter_prior: minor.clone(),
            positional: minor.clone(),
            left_bigram: minor.clone(),
            right_bigram: minor.clone(),
            affix: minor,
        }
    }
}

impl WeightGrid {
    /// Every grid point whose weights sum to 1, in grid order
    #[must_use]
    pub fn combinations(&self) -> Vec<ScoringWeights> {
        let mut out = Vec::new();
        for &a in &self.eig {
            for &b in &self.letter_prior {
                for &c in &self.positional {
                    for &d in &self.left_bigram {
                        for &e in &self.right_bigram {
                            for &f in &self.affix {
                                if let Ok(w) = ScoringWeights::new(a, b, c, d, e, f).validate() {
                                    out.push(w);
                                }
                            }
                        }
                    }
                }
            }
        }
        out
    }
}

/// Tuning run settings
#[derive(Debug, Clone)]
pub struct TuneConfig {
    pub folds: usize,
    pub fold_size: usize,
    pub seed: u64,
    pub max_guesses: u32,
    pub grid: WeightGrid,
}

impl Default for TuneConfig {
    fn default() -> Self {
        Self {
            folds: 3,
            fold_size: 30,
            seed: 42,
            max_guesses: super::solve::DEFAULT_MAX_GUESSES,
            grid: WeightGrid::default(),
        }
    }
}

/// Fold-averaged performance of one weight combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightScore {
    pub weights: ScoringWeights,
    pub win_rate: f64,
    /// Wrong guesses spent per phrase
    pub average_wrong_guesses: f64,
}

/// Outcome of a grid search
#[derive(Debug)]
pub struct TuneResult {
    /// Number of valid grid points evaluated
    pub combinations: usize,
    /// Best win rate first; ties keep grid order
    pub ranked: Vec<WeightScore>,
}

impl TuneResult {
    #[must_use]
    pub fn best(&self) -> Option<&WeightScore> {
        self.ranked.first()
    }
}

/// Draw `folds` independent samples of `fold_size` words each
///
/// A fold never repeats a word; it is truncated to the list size when the
/// list is shorter than `fold_size`.
#[must_use]
pub fn sample_folds(
    words: &[String],
    folds: usize,
    fold_size: usize,
    seed: u64,
) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let amount = fold_size.min(words.len());
    (0..folds)
        .map(|_| {
            sample(&mut rng, words.len(), amount)
                .iter()
                .map(|i| words[i].clone())
                .collect()
        })
        .collect()
}

/// Win rate and mean wrong guesses of the weights on one fold
fn evaluate_fold(
    context: &SolverContext,
    weights: ScoringWeights,
    fold: &[String],
    max_guesses: u32,
) -> (f64, f64) {
    if fold.is_empty() {
        return (0.0, 0.0);
    }
    let solver = Solver::with_weights(context, weights);
    let mut wins = 0usize;
    let mut wrong = 0usize;
    for phrase in fold {
        let mut config = SolveConfig::new(phrase.clone());
        config.max_guesses = max_guesses;
        match solve_phrase(&config, &solver) {
            Ok(result) => {
                wins += usize::from(result.success());
                wrong += result.wrong_guesses();
            }
            Err(e) => log::warn!("Skipping phrase {phrase:?}: {e}"),
        }
    }
    let n = fold.len() as f64;
    (wins as f64 / n, wrong as f64 / n)
}

/// Evaluate every valid grid point over the sampled folds
pub fn run_tune(
    context: &SolverContext,
    words: &[String],
    config: &TuneConfig,
    progress: &ProgressBar,
) -> TuneResult {
    let folds = sample_folds(words, config.folds, config.fold_size, config.seed);
    let combos = config.grid.combinations();
    log::info!(
        "Evaluating {} weight combinations over {} folds",
        combos.len(),
        folds.len()
    );

    let mut ranked: Vec<WeightScore> = combos
        .par_iter()
        .map(|&weights| {
            let (wins, wrong) = folds
                .iter()
                .map(|fold| evaluate_fold(context, weights, fold, config.max_guesses))
                .fold((0.0, 0.0), |(w, m), (fw, fm)| (w + fw, m + fm));
            let n = folds.len().max(1) as f64;
            let score = WeightScore {
                weights,
                win_rate: wins / n,
                average_wrong_guesses: wrong / n,
            };
            log::debug!(
                "weights={weights} -> win rate {:.3}, {:.2} wrong",
                score.win_rate,
                score.average_wrong_guesses
            );
            progress.inc(1);
            score
        })
        .collect();

    progress.finish_with_message("Complete!");

    // Stable sort, so equal win rates stay in grid order
    ranked.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));

    TuneResult {
        combinations: combos.len(),
        ranked,
    }
}
