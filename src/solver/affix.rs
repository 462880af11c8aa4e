//! Affix and orthographic bonus
//!
//! Rewards letters that would complete a common English morpheme given a
//! slot's literal string (blanks included): `-ing`, `-tion`, `-ous`, `-ment`,
//! `-able`, `-ive`, a few prefixes and domain chunks, plus some spelling
//! habits (`q` → `u`, doubled consonants). Points add up, are clamped to
//! [`MAX_BONUS`], then scaled to `[0, 1]`.

use crate::core::{BLANK, letter};

/// Ceiling on the raw point total
pub const MAX_BONUS: u32 = 10;

/// Suffix rules: (slot ending, letters rewarded, points)
const SUFFIX_RULES: &[(&[u8], &[u8], u32)] = &[
    // -ing / -ion
    (b"i__", b"n", 6),
    (b"i__", b"o", 3),
    (b"in_", b"g", 7),
    (b"_io", b"n", 6),
    (b"ti_", b"o", 5),
    (b"tio", b"n", 6),
    // -ed
    (b"__d", b"e", 4),
    (b"_ed", b"trnsl", 3),
    // -er, -ly
    (b"_er", b"tnrlds", 3),
    (b"_ly", b"ble", 3),
    // -ous, -ment, -able, -ive
    (b"ou_", b"s", 5),
    (b"me_", b"n", 4),
    (b"men_", b"t", 5),
    (b"ab_", b"l", 4),
    (b"abl_", b"e", 4),
    (b"iv_", b"e", 4),
    // avio(n)
    (b"avi", b"o", 3),
];

/// Prefix rules: (three-letter head followed by a blank, letters rewarded, points)
const PREFIX_RULES: &[(&[u8], &[u8], u32)] = &[
    (b"pre", b"smt", 3),
    (b"dis", b"cpt", 3),
    (b"uni", b"tfn", 2),
    (b"air", b"cfst", 2),
    (b"aer", b"od", 2),
];

/// Consonants that commonly appear doubled
const DOUBLED: &[u8] = b"lnrstm";

/// Raw point total for `letter` against the slot string, before clamping
#[must_use]
pub fn raw_points(letter: u8, slot: &[u8]) -> u32 {
    let mut points = 0;

    for &(ending, letters, bonus) in SUFFIX_RULES {
        if slot.ends_with(ending) && letters.contains(&letter) {
            points += bonus;
        }
    }

    for &(head, letters, bonus) in PREFIX_RULES {
        if slot.starts_with(head) && slot.get(head.len()) == Some(&BLANK) && letters.contains(&letter)
        {
            points += bonus;
        }
    }

    if letter == b'u' && slot.contains(&b'q') {
        points += 7;
    }

    if DOUBLED.contains(&letter) && slot.windows(2).any(|w| w == [BLANK, BLANK]) {
        points += 3;
    }

    // ...C_ suggests doubling C
    if let [.., prev, last] = slot
        && *last == BLANK
        && *prev != BLANK
        && !letter::is_vowel(*prev)
        && *prev == letter
    {
        points += 3;
    }

    points
}

/// Bonus in `[0, 1]`
///
/// # Examples
/// ```
/// use hangman_solver::solver::affix::bonus;
///
/// assert!((bonus(b'g', b"boardin_") - 0.7).abs() < 1e-12);
/// assert_eq!(bonus(b'z', b"boardin_"), 0.0);
/// ```
#[must_use]
pub fn bonus(letter: u8, slot: &[u8]) -> f64 {
    f64::from(raw_points(letter, slot).min(MAX_BONUS)) / f64::from(MAX_BONUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn ing_progression() {
        assert!(approx(bonus(b'g', b"board__"), 0.0));
        // "i__": n +6, plus the double-blank rule for n +3
        assert!(approx(bonus(b'n', b"boardi__"), 0.9));
        assert!(approx(bonus(b'o', b"boardi__"), 0.3));
        assert!(approx(bonus(b'g', b"boardin_"), 0.7));
    }

    #[test]
    fn tion_progression() {
        assert!(approx(bonus(b'o', b"reserva_ti_"), 0.5));
        assert!(approx(bonus(b'n', b"reservatio_"), 0.0));
        assert!(approx(bonus(b'n', b"reserva_io"), 0.6));
        assert!(approx(bonus(b'n', b"reservatio"), 0.6));
    }

    #[test]
    fn other_suffixes() {
        assert!(approx(bonus(b's', b"vari_ou_"), 0.5));
        assert!(approx(bonus(b'n', b"equipme_"), 0.4));
        // "men_": t +5, and "n_" doubling does not apply to t
        assert!(approx(bonus(b't', b"equipmen_"), 0.5));
        assert!(approx(bonus(b'l', b"reliab_"), 0.4));
        assert!(approx(bonus(b'e', b"reliabl_"), 0.4));
        assert!(approx(bonus(b'e', b"reactiv_"), 0.4));
    }

    #[test]
    fn prefixes_need_following_blank() {
        assert!(approx(bonus(b's', b"pre_____"), 0.6)); // prefix +3, double blank +3
        assert!(approx(bonus(b'c', b"dis_"), 0.3));
        assert!(approx(bonus(b'f', b"uni_o_m"), 0.2));
        assert!(approx(bonus(b'c', b"airc"), 0.0));
        assert!(approx(bonus(b'c', b"air_"), 0.2));
    }

    #[test]
    fn q_wants_u() {
        assert!(approx(bonus(b'u', b"q_i_k"), 0.7));
        assert!(approx(bonus(b'u', b"_i_k"), 0.0));
    }

    #[test]
    fn doubled_consonants() {
        assert!(approx(bonus(b'l', b"ba__"), 0.3));
        assert!(approx(bonus(b'p', b"ba__"), 0.0));
        // revealed consonant then a single blank
        assert!(approx(bonus(b'f', b"sta_f_"), 0.3));
        // vowel before the blank does not count
        assert!(approx(bonus(b'a', b"sta_a_"), 0.0));
    }

    #[test]
    fn bonus_is_clamped() {
        assert_eq!(raw_points(b'n', b"ti__"), 9);
        assert_eq!(raw_points(b'g', b"quin_"), 7);
        assert_eq!(raw_points(b'n', b"quin_"), 3);

        // pre_ (3) + ou_ (5) + double blank (3)
        assert_eq!(raw_points(b's', b"pre__ou_"), 11);
        assert!(approx(bonus(b's', b"pre__ou_"), 1.0));

        for letter in b'a'..=b'z' {
            let b = bonus(letter, b"i__q_in_");
            assert!((0.0..=1.0).contains(&b));
        }
    }
}
