//! Letter helpers shared by every scoring table
//!
//! Letters are handled as lowercase ASCII bytes (`b'a'..=b'z'`) and mapped to
//! table indices 0-25.

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Static descending English frequency order, used as the last-resort guess order
pub const FREQUENCY_ORDER: &[u8; ALPHABET_SIZE] = b"etaoinrshlcdumpgbyfvkwzxjq";

/// Iterate the alphabet in order (`a` through `z`)
///
/// This order is also the tie-break order for every argmax in the solver.
pub fn alphabet() -> impl Iterator<Item = u8> {
    b'a'..=b'z'
}

/// Table index of a lowercase letter
///
/// Callers must pass a lowercase ASCII letter.
#[inline]
#[must_use]
pub const fn index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Letter for a table index (0-25)
#[inline]
#[must_use]
pub const fn from_index(index: usize) -> u8 {
    b'a' + index as u8
}

/// Check whether a byte is a lowercase ASCII letter
#[inline]
#[must_use]
pub const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// Check whether a letter is a vowel
#[inline]
#[must_use]
pub const fn is_vowel(letter: u8) -> bool {
    matches!(letter, b'a' | b'e' | b'i' | b'o' | b'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_alphabet() {
        for (i, letter) in alphabet().enumerate() {
            assert_eq!(index(letter), i);
            assert_eq!(from_index(i), letter);
        }
    }

    #[test]
    fn frequency_order_is_a_permutation() {
        let mut seen = [false; ALPHABET_SIZE];
        for &letter in FREQUENCY_ORDER {
            assert!(!seen[index(letter)], "duplicate '{}'", letter as char);
            seen[index(letter)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn vowels() {
        assert!(is_vowel(b'a'));
        assert!(is_vowel(b'u'));
        assert!(!is_vowel(b'y'));
        assert!(!is_vowel(b'n'));
    }
}
