//! Shared read-only solver state

use super::priors::PriorModel;
use crate::core::Lexicon;

/// Lexicon plus the priors derived from it
///
/// Built once and never mutated, so one context can back any number of
/// solvers and game sessions at once (it is `Sync`).
#[derive(Debug, Clone)]
pub struct SolverContext {
    lexicon: Lexicon,
    priors: PriorModel,
}

impl SolverContext {
    /// Build priors from the lexicon and bundle both
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        let priors = PriorModel::build(&lexicon);
        log::info!("Built priors from {} lexicon words", lexicon.len());
        Self { lexicon, priors }
    }

    /// Convenience constructor from raw words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Lexicon::new(words))
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    #[must_use]
    pub const fn priors(&self) -> &PriorModel {
        &self.priors
    }
}
