//! Expected information gain for a letter guess
//!
//! Not Shannon entropy: a candidate-count reduction heuristic. Guessing a
//! letter splits the candidates into buckets by the positions (among the
//! slot's blanks) where the letter would appear. The expected number of
//! candidates left is
//!
//! E = Σ |bucket|² / |C|
//!
//! and the utility is `1 - E / |C|`, in `[0, 1)`.

use rustc_hash::FxHashMap;

/// Partition metrics for one letter against one candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterMetrics {
    /// Expected candidates remaining after the guess
    pub expected_remaining: f64,
    /// `1 - expected_remaining / total`, bigger is better
    pub utility: f64,
}

/// Group candidates by the reveal mask the letter would produce
///
/// Bit `k` of a mask is set when the candidate holds `letter` at
/// `blanks[k]`. Slots longer than 64 cells never reach this point because
/// the lexicon does not hold such words.
#[must_use]
pub fn partition<S: AsRef<str>>(
    letter: u8,
    candidates: &[S],
    blanks: &[usize],
) -> FxHashMap<u64, usize> {
    let mut buckets: FxHashMap<u64, usize> = FxHashMap::default();

    for candidate in candidates {
        let bytes = candidate.as_ref().as_bytes();
        let mask = blanks
            .iter()
            .enumerate()
            .filter(|&(_, &i)| bytes[i] == letter)
            .fold(0u64, |mask, (k, _)| mask | (1 << k));
        *buckets.entry(mask).or_insert(0) += 1;
    }

    buckets
}

/// Expected remaining candidates from bucket sizes
///
/// # Examples
/// ```
/// use hangman_solver::solver::eig::expected_remaining;
///
/// // 2 + 1 candidates: (4 + 1) / 3
/// assert!((expected_remaining([2, 1]) - 5.0 / 3.0).abs() < 1e-12);
/// assert_eq!(expected_remaining(Vec::<usize>::new()), 0.0);
/// ```
#[must_use]
pub fn expected_remaining<I: IntoIterator<Item = usize>>(bucket_sizes: I) -> f64 {
    let (total, squares) = bucket_sizes
        .into_iter()
        .fold((0usize, 0usize), |(t, s), size| (t + size, s + size * size));

    if total == 0 {
        return 0.0;
    }
    squares as f64 / total as f64
}

/// Compute partition metrics for guessing `letter`
#[must_use]
pub fn calculate_metrics<S: AsRef<str>>(
    letter: u8,
    candidates: &[S],
    blanks: &[usize],
) -> LetterMetrics {
    if candidates.is_empty() {
        return LetterMetrics {
            expected_remaining: 0.0,
            utility: 0.0,
        };
    }

    let buckets = partition(letter, candidates, blanks);
    let total = candidates.len() as f64;
    let expected = expected_remaining(buckets.values().copied());

    LetterMetrics {
        expected_remaining: expected,
        utility: 1.0 - expected / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: [&str; 3] = ["cat", "car", "can"];

    #[test]
    fn bucket_sizes_sum_to_candidate_count() {
        let words = ["cabin", "cargo", "cable", "crane", "carry", "canal"];
        let blanks = [1, 2, 3, 4];
        for letter in b'a'..=b'z' {
            let buckets = partition(letter, &words, &blanks);
            assert_eq!(buckets.values().sum::<usize>(), words.len());

            let metrics = calculate_metrics(letter, &words, &blanks);
            assert!(metrics.expected_remaining <= words.len() as f64);
            assert!(metrics.utility >= 0.0 && metrics.utility < 1.0);
        }
    }

    #[test]
    fn letter_everywhere_gains_nothing() {
        let buckets = partition(b'a', &CANDIDATES, &[1, 2]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.get(&0b01), Some(&3));

        let metrics = calculate_metrics(b'a', &CANDIDATES, &[1, 2]);
        assert!((metrics.expected_remaining - 3.0).abs() < 1e-12);
        assert!(metrics.utility.abs() < 1e-12);
    }

    #[test]
    fn letter_in_one_candidate_splits() {
        let buckets = partition(b't', &CANDIDATES, &[1, 2]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.values().copied().max(), Some(2));

        let metrics = calculate_metrics(b't', &CANDIDATES, &[1, 2]);
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 1e-12);
        assert!((metrics.utility - 4.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn masks_distinguish_positions() {
        // Same letter count, different positions
        let words = ["abba", "baab"];
        let buckets = partition(b'a', &words, &[0, 1, 2, 3]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.get(&0b1001), Some(&1));
        assert_eq!(buckets.get(&0b0110), Some(&1));
    }

    #[test]
    fn empty_candidates() {
        let words: [&str; 0] = [];
        let metrics = calculate_metrics(b'e', &words, &[0]);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
        assert!(metrics.utility.abs() < f64::EPSILON);
    }
}
