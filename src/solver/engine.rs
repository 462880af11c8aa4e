//! Main Hangman solver interface

use super::context::SolverContext;
use super::strategy::{Guess, Guesser, best_letter, static_choice};
use super::weights::{ScoringWeights, Signals};
use super::{affix, eig, filter, oov};
use crate::core::letter::{self, ALPHABET_SIZE};
use crate::core::{GuessedSet, Pattern, Slot};
use std::fmt;

/// Which rule of the selection cascade produced a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// A slot had exactly one candidate
    Forced,
    /// Partition utility blended with priors on the most constrained slot
    Eig,
    /// Letter counts over all candidate words
    Frequency,
    /// No candidates: priors and affixes only
    OutOfVocabulary,
    /// Fixed English frequency order
    Static,
    /// All 26 letters tried
    Exhausted,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forced => "forced completion",
            Self::Eig => "expected information gain",
            Self::Frequency => "candidate frequency",
            Self::OutOfVocabulary => "out-of-vocabulary priors",
            Self::Static => "static order",
            Self::Exhausted => "letters exhausted",
        };
        f.write_str(name)
    }
}

/// A guess together with how it was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub guess: Guess,
    pub tier: Tier,
    /// Candidate count per slot, in phrase order
    pub slot_candidates: Vec<usize>,
}

/// Main Hangman solver
///
/// Holds only a shared context and its weights, so `next_guess` is a pure
/// function of its arguments and one solver can serve many games at once.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    context: &'a SolverContext,
    weights: ScoringWeights,
    oov_weights: ScoringWeights,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default weights
    #[must_use]
    pub fn new(context: &'a SolverContext) -> Self {
        Self::with_weights(context, ScoringWeights::default())
    }

    /// Create a solver with custom weights for the candidate-scoring tier
    #[must_use]
    pub const fn with_weights(context: &'a SolverContext, weights: ScoringWeights) -> Self {
        Self {
            context,
            weights,
            oov_weights: ScoringWeights::OUT_OF_VOCABULARY,
        }
    }

    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    #[must_use]
    pub const fn context(&self) -> &'a SolverContext {
        self.context
    }

    /// Choose the next letter and report which rule chose it
    ///
    /// Precedence: exhaustion, forced completion, EIG scoring on the most
    /// constrained slot, candidate frequency, out-of-vocabulary priors,
    /// static order. Every argmax breaks ties alphabetically.
    #[must_use]
    pub fn decide(&self, pattern: &Pattern, guessed: GuessedSet) -> Decision {
        if guessed.is_full() {
            return Decision {
                guess: Guess::Reset,
                tier: Tier::Exhausted,
                slot_candidates: Vec::new(),
            };
        }

        let slots = pattern.slots();
        let sets: Vec<Vec<&str>> = slots
            .iter()
            .map(|slot| filter::candidates(self.context.lexicon(), slot, guessed))
            .collect();
        let slot_candidates: Vec<usize> = sets.iter().map(Vec::len).collect();

        let choice = forced_completion(&slots, &sets, guessed)
            .map(|l| (l, Tier::Forced))
            .or_else(|| self.eig_choice(&slots, &sets, guessed).map(|l| (l, Tier::Eig)))
            .or_else(|| frequency_choice(&sets, guessed).map(|l| (l, Tier::Frequency)))
            .or_else(|| {
                oov::score(self.context.priors(), &slots, guessed, &self.oov_weights)
                    .map(|l| (l, Tier::OutOfVocabulary))
            })
            .or_else(|| static_choice(guessed).map(|l| (l, Tier::Static)));

        let (guess, tier) = match choice {
            Some((l, tier)) => (Guess::Letter(l), tier),
            None => (Guess::Reset, Tier::Exhausted),
        };

        log::debug!(
            "pattern={pattern} guessed={guessed} candidates={slot_candidates:?} -> {:?} via {tier}",
            guess.letter().map(char::from)
        );

        Decision {
            guess,
            tier,
            slot_candidates,
        }
    }

    /// Score letters on the slot with the fewest candidates
    fn eig_choice(&self, slots: &[Slot<'_>], sets: &[Vec<&str>], guessed: GuessedSet) -> Option<u8> {
        // min_by_key keeps the first minimum, so ties go to phrase order
        let (slot, candidates) = slots
            .iter()
            .zip(sets)
            .filter(|(slot, set)| slot.has_blanks() && !set.is_empty())
            .min_by_key(|(_, set)| set.len())?;

        let blanks = slot.blank_indices();
        let present: GuessedSet = candidates.iter().flat_map(|w| w.bytes()).collect();

        best_letter(present.difference(guessed).iter().map(|letter| {
            let metrics = eig::calculate_metrics(letter, candidates, &blanks);
            let signals = Signals {
                eig: metrics.utility,
                ..self.slot_signals(slot, &blanks, letter)
            };
            (letter, self.weights.combine(&signals))
        }))
    }

    /// Prior and affix signals for one letter on one slot
    ///
    /// The letter prior is counted once; positional and bigram priors are
    /// summed over the blanks.
    fn slot_signals(&self, slot: &Slot<'_>, blanks: &[usize], letter: u8) -> Signals {
        let priors = self.context.priors();
        let mut signals = Signals {
            letter_prior: priors.letter(letter),
            affix: affix::bonus(letter, slot.as_bytes()),
            ..Signals::default()
        };
        for &i in blanks {
            signals.positional += priors.positional(slot.len(), i, letter);
            signals.left_bigram += priors.left_bigram(slot.left_of(i), letter);
            signals.right_bigram += priors.right_bigram(letter, slot.right_of(i));
        }
        signals
    }
}

impl Guesser for Solver<'_> {
    fn next_guess(&self, pattern: &Pattern, guessed: GuessedSet, _remaining: u32) -> Guess {
        self.decide(pattern, guessed).guess
    }
}

/// First un-guessed letter of the only candidate of a slot that still has blanks
fn forced_completion(slots: &[Slot<'_>], sets: &[Vec<&str>], guessed: GuessedSet) -> Option<u8> {
    slots
        .iter()
        .zip(sets)
        .filter(|(slot, set)| slot.has_blanks() && set.len() == 1)
        .find_map(|(_, set)| set[0].bytes().find(|&b| !guessed.contains(b)))
}

/// Un-guessed letter contained in the most candidate words, across all slots
fn frequency_choice(sets: &[Vec<&str>], guessed: GuessedSet) -> Option<u8> {
    let mut counts = [0usize; ALPHABET_SIZE];
    for word in sets.iter().flatten() {
        let letters: GuessedSet = word.bytes().collect();
        for l in letters.difference(guessed).iter() {
            counts[letter::index(l)] += 1;
        }
    }

    best_letter(
        counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| (letter::from_index(i), count as f64)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &[u8]) -> GuessedSet {
        letters.iter().copied().collect()
    }

    fn decide(context: &SolverContext, pattern: &str, tried: &[u8]) -> Decision {
        let pattern = Pattern::parse(pattern).unwrap();
        Solver::new(context).decide(&pattern, guessed(tried))
    }

    #[test]
    fn eig_tie_breaks_alphabetically() {
        // t, r and n split the candidates identically and share every prior
        let context = SolverContext::from_words(["cat", "car", "can"]);
        let decision = decide(&context, "c__", b"");

        assert_eq!(decision.tier, Tier::Eig);
        assert_eq!(decision.guess, Guess::Letter(b'n'));
        assert_eq!(decision.slot_candidates, vec![3]);
    }

    #[test]
    fn singleton_candidate_forces_completion() {
        let context = SolverContext::from_words(["go", "an", "be", "if"]);

        let first = decide(&context, "__", b"aei");
        assert_eq!(first.tier, Tier::Forced);
        assert_eq!(first.guess, Guess::Letter(b'g'));

        let second = decide(&context, "g_", b"aeig");
        assert_eq!(second.tier, Tier::Forced);
        assert_eq!(second.guess, Guess::Letter(b'o'));
    }

    #[test]
    fn forced_letter_comes_from_the_candidate() {
        let context = SolverContext::from_words(["runway", "ramp", "rate", "rote"]);
        let decision = decide(&context, "r_____ ____", b"re");
        // "r_____" has only "runway"; "____" has nothing once r and e are out
        let letter = decision.guess.letter().unwrap();
        assert_eq!(decision.tier, Tier::Forced);
        assert!(b"runway".contains(&letter));
        assert_eq!(letter, b'u');
    }

    #[test]
    fn slots_are_filtered_independently() {
        let context = SolverContext::from_words(["on", "go", "at", "time", "tile", "tame"]);
        let decision = decide(&context, "__ ____", b"");
        assert_eq!(decision.slot_candidates, vec![3, 3]);
        assert!(decision.guess.letter().is_some());
    }

    #[test]
    fn most_constrained_slot_is_scored() {
        let context =
            SolverContext::from_words(["on", "go", "time", "tile", "tame", "tide", "tire"]);
        // Two-letter slot has 2 candidates, four-letter slot has 5
        let decision = decide(&context, "__ ____", b"");
        assert_eq!(decision.tier, Tier::Eig);
        let letter = decision.guess.letter().unwrap();
        assert!(b"gno".contains(&letter));
    }

    #[test]
    fn frequency_fallback_when_scored_slot_has_no_new_letters() {
        let context = SolverContext::from_words(["aa", "bake", "bike", "bite"]);
        // "a_" only matches "aa", whose letters are all tried; the other slot
        // has bike/bite, where e and i both appear twice
        let decision = decide(&context, "a_ b___", b"ab");
        assert_eq!(decision.tier, Tier::Frequency);
        assert_eq!(decision.guess, Guess::Letter(b'e'));
        assert_eq!(decision.slot_candidates, vec![1, 2]);
    }

    #[test]
    fn out_of_vocabulary_uses_priors() {
        let context = SolverContext::from_words(["cat", "dog"]);
        let decision = decide(&context, "_____", b"");
        assert_eq!(decision.tier, Tier::OutOfVocabulary);
        assert_eq!(decision.slot_candidates, vec![0]);
        assert!(decision.guess.letter().is_some());
    }

    #[test]
    fn static_order_when_nothing_is_known() {
        let context = SolverContext::from_words(Vec::<String>::new());
        let decision = decide(&context, "_", b"");
        assert_eq!(decision.tier, Tier::Static);
        assert_eq!(decision.guess, Guess::Letter(b'e'));

        let decision = decide(&context, "_", b"et");
        assert_eq!(decision.guess, Guess::Letter(b'a'));
    }

    #[test]
    fn exhausted_letters_reset() {
        let context = SolverContext::from_words(["cat"]);
        let all: Vec<u8> = letter::alphabet().collect();
        let decision = decide(&context, "c__", &all);
        assert_eq!(decision.guess, Guess::Reset);
        assert_eq!(decision.tier, Tier::Exhausted);
        assert_eq!(decision.guess.status().as_str(), "reset");
    }

    #[test]
    fn never_returns_a_guessed_letter() {
        let context = SolverContext::from_words([
            "cabin", "crew", "cargo", "fuel", "gate", "hub", "pilot", "radar", "route",
        ]);
        let tried_sets: [&[u8]; 5] = [b"", b"e", b"ea", b"eaoi", b"etaoinrshl"];
        for tried in tried_sets {
            for pattern in ["_____", "____ ___", "c____", "__l__"] {
                let decision = decide(&context, pattern, tried);
                let letter = decision.guess.letter().unwrap();
                assert!(!tried.contains(&letter), "{pattern} {}", letter as char);
            }
        }
    }

    #[test]
    fn decisions_are_deterministic() {
        let context = SolverContext::from_words([
            "boarding", "baggage", "cabin", "crew", "delay", "flight", "gate", "runway",
        ]);
        let solver = Solver::new(&context);
        let pattern = Pattern::parse("_____ ____").unwrap();
        let tried = guessed(b"ez");

        let first = solver.decide(&pattern, tried);
        for _ in 0..10 {
            assert_eq!(solver.decide(&pattern, tried), first);
            assert_eq!(solver.next_guess(&pattern, tried, 6), first.guess);
        }
    }

    #[test]
    fn weights_change_scoring_without_mutation() {
        let context = SolverContext::from_words(["cat", "car", "can"]);
        let pattern = Pattern::parse("c__").unwrap();

        // Letter prior only: a and c tie as the most frequent letters
        let prior_only = ScoringWeights::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        let solver = Solver::with_weights(&context, prior_only);
        assert_eq!(
            solver.decide(&pattern, GuessedSet::new()).guess,
            Guess::Letter(b'a')
        );

        let default = Solver::new(&context);
        assert_eq!(
            default.decide(&pattern, GuessedSet::new()).guess,
            Guess::Letter(b'n')
        );
    }
}
