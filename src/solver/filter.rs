//! Candidate filtering for one slot
//!
//! A lexicon word is a candidate for a slot when it has the slot's length,
//! agrees with every revealed cell, and contains no letter that was guessed
//! but is absent from the slot's revealed cells.

use crate::core::{BLANK, GuessedSet, Lexicon, Slot};

/// Return every lexicon word consistent with `slot` and `guessed`
///
/// An empty result is a valid state (out of vocabulary), not an error.
/// Words come back in the lexicon's sorted order.
///
/// # Examples
/// ```
/// use hangman_solver::core::{GuessedSet, Lexicon, Pattern};
/// use hangman_solver::solver::filter::candidates;
///
/// let lexicon = Lexicon::new(["cat", "car", "can", "cot"]);
/// let pattern = Pattern::parse("c__").unwrap();
/// let guessed: GuessedSet = b"co".iter().copied().collect();
///
/// let found = candidates(&lexicon, &pattern.slots()[0], guessed);
/// assert_eq!(found, ["can", "car", "cat"]);
/// ```
#[must_use]
pub fn candidates<'a>(lexicon: &'a Lexicon, slot: &Slot<'_>, guessed: GuessedSet) -> Vec<&'a str> {
    let excluded = guessed.difference(slot.revealed());

    lexicon
        .with_length(slot.len())
        .iter()
        .map(String::as_str)
        .filter(|word| matches(word.as_bytes(), slot.as_bytes(), excluded))
        .collect()
}

/// Check one word against a slot's cells and the excluded (wrong) letters
fn matches(word: &[u8], cells: &[u8], excluded: GuessedSet) -> bool {
    word.len() == cells.len()
        && word
            .iter()
            .zip(cells)
            .all(|(&w, &c)| c == BLANK || w == c)
        && !excluded.intersects_word(word)
}
