//! Scoring weights for blending letter signals
//!
//! The solver combines six per-letter signals into one score. The weights are
//! an explicit configuration value injected at construction, so tuning runs
//! can try other settings without touching a live solver.

use std::fmt;
use std::str::FromStr;

/// Allowed drift of the weight sum away from 1.0
const SUM_TOLERANCE: f64 = 1e-6;

/// Per-letter signals, each roughly in `[0, 1]` (sums over blanks can exceed 1)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Signals {
    pub eig: f64,
    pub letter_prior: f64,
    pub positional: f64,
    pub left_bigram: f64,
    pub right_bigram: f64,
    pub affix: f64,
}

/// Named weights for each signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub eig: f64,
    pub letter_prior: f64,
    pub positional: f64,
    pub left_bigram: f64,
    pub right_bigram: f64,
    pub affix: f64,
}

/// Error type for invalid weight settings
#[derive(Debug, Clone, PartialEq)]
pub enum WeightsError {
    FieldCount(usize),
    InvalidNumber(String),
    Negative(&'static str),
    BadSum(f64),
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "Expected 6 comma-separated weights, got {n}"),
            Self::InvalidNumber(s) => write!(f, "Invalid weight {s:?}"),
            Self::Negative(name) => write!(f, "Weight '{name}' must not be negative"),
            Self::BadSum(sum) => write!(f, "Weights must sum to 1.0, got {sum:.4}"),
        }
    }
}

impl std::error::Error for WeightsError {}

impl ScoringWeights {
    /// Weights used when no candidate exists: priors and affixes only
    pub const OUT_OF_VOCABULARY: Self = Self::new(0.0, 0.2, 0.3, 0.2, 0.2, 0.1);

    /// Create weights in signal order (EIG, letter prior, positional,
    /// left bigram, right bigram, affix)
    #[must_use]
    pub const fn new(
        eig: f64,
        letter_prior: f64,
        positional: f64,
        left_bigram: f64,
        right_bigram: f64,
        affix: f64,
    ) -> Self {
        Self {
            eig,
            letter_prior,
            positional,
            left_bigram,
            right_bigram,
            affix,
        }
    }

    /// Build from a 6-element array in signal order
    #[must_use]
    pub const fn from_array(w: [f64; 6]) -> Self {
        Self::new(w[0], w[1], w[2], w[3], w[4], w[5])
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 6] {
        [
            self.eig,
            self.letter_prior,
            self.positional,
            self.left_bigram,
            self.right_bigram,
            self.affix,
        ]
    }

    #[must_use]
    pub fn sum(self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Check that every weight is non-negative and they sum to 1
    ///
    /// # Errors
    /// Returns `WeightsError::Negative` or `WeightsError::BadSum`.
    pub fn validate(self) -> Result<Self, WeightsError> {
        const NAMES: [&str; 6] = [
            "eig",
            "letter_prior",
            "positional",
            "left_bigram",
            "right_bigram",
            "affix",
        ];
        if let Some(i) = self.to_array().iter().position(|&w| w < 0.0) {
            return Err(WeightsError::Negative(NAMES[i]));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }
        Ok(self)
    }

    /// Weighted sum of the signals
    #[inline]
    #[must_use]
    pub fn combine(&self, s: &Signals) -> f64 {
        self.eig * s.eig
            + self.letter_prior * s.letter_prior
            + self.positional * s.positional
            + self.left_bigram * s.left_bigram
            + self.right_bigram * s.right_bigram
            + self.affix * s.affix
    }
}

impl Default for ScoringWeights {
    /// 0.4 EIG, 0.25 letter prior, 0.15 positional, 0.05 left bigram,
    /// 0 right bigram, 0.15 affix
    fn default() -> Self {
        Self::new(0.4, 0.25, 0.15, 0.05, 0.0, 0.15)
    }
}

impl FromStr for ScoringWeights {
    type Err = WeightsError;

    /// Parse `"0.4,0.25,0.15,0.05,0,0.15"` and validate it
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(WeightsError::FieldCount(fields.len()));
        }

        let mut values = [0.0; 6];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field
                .parse()
                .map_err(|_| WeightsError::InvalidNumber((*field).to_string()))?;
        }

        Self::from_array(values).validate()
    }
}

impl fmt::Display for ScoringWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eig={:.2} prior={:.2} pos={:.2} left={:.2} right={:.2} affix={:.2}",
            self.eig,
            self.letter_prior,
            self.positional,
            self.left_bigram,
            self.right_bigram,
            self.affix
        )
    }
}
