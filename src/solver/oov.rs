//! Out-of-vocabulary letter scoring
//!
//! Used when no slot has a dictionary candidate. There is nothing to
//! partition, so each letter is scored from priors and affixes alone,
//! summed over every blank of every slot.

use super::affix;
use super::priors::PriorModel;
use super::strategy::best_letter;
use super::weights::{ScoringWeights, Signals};
use crate::core::{GuessedSet, Slot};

/// Sum the prior signals for `letter` over every blank of every slot
///
/// The letter prior is counted once per blank here; the affix bonus is
/// counted once per slot.
#[must_use]
pub fn phrase_signals(priors: &PriorModel, slots: &[Slot<'_>], letter: u8) -> Signals {
    let mut signals = Signals::default();

    for slot in slots.iter().filter(|s| s.has_blanks()) {
        for i in slot.blank_indices() {
            signals.letter_prior += priors.letter(letter);
            signals.positional += priors.positional(slot.len(), i, letter);
            signals.left_bigram += priors.left_bigram(slot.left_of(i), letter);
            signals.right_bigram += priors.right_bigram(letter, slot.right_of(i));
        }
        signals.affix += affix::bonus(letter, slot.as_bytes());
    }

    signals
}

/// Pick the best un-guessed letter for a phrase with no candidates
///
/// Returns `None` when every letter is guessed or no letter scores above
/// zero (no evidence at all, e.g. an empty lexicon).
#[must_use]
pub fn score(
    priors: &PriorModel,
    slots: &[Slot<'_>],
    guessed: GuessedSet,
    weights: &ScoringWeights,
) -> Option<u8> {
    best_letter(
        guessed
            .remaining()
            .map(|letter| (letter, weights.combine(&phrase_signals(priors, slots, letter))))
            .filter(|&(_, score)| score > 0.0),
    )
}
