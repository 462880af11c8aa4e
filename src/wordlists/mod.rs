//! Word lists for Hangman solving
//!
//! Provides embedded word lists compiled into the binary and file loaders.

mod embedded;
pub mod loader;

pub use embedded::{COMMON_WORDS, DOMAIN_WORDS, SAMPLE_PHRASES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letter;

    fn is_clean(word: &str) -> bool {
        !word.is_empty() && word.bytes().all(letter::is_letter)
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in DOMAIN_WORDS.iter().chain(COMMON_WORDS) {
            assert!(is_clean(word), "Word '{word}' is not lowercase ASCII");
        }
    }

    #[test]
    fn sample_phrases_are_letters_and_single_spaces() {
        for &phrase in SAMPLE_PHRASES {
            assert!(
                phrase.split(' ').all(is_clean),
                "Phrase '{phrase}' has an invalid slot"
            );
        }
    }

    #[test]
    fn every_sample_word_is_in_the_domain_list() {
        for &phrase in SAMPLE_PHRASES {
            for word in phrase.split(' ') {
                assert!(DOMAIN_WORDS.contains(&word), "'{word}' missing from domain list");
            }
        }
    }

    #[test]
    fn domain_list_has_no_duplicates() {
        let mut sorted = DOMAIN_WORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), DOMAIN_WORDS.len());
    }
}
