//! Rule primitives: pure predicates over a candidate string.
//!
//! Every function here is total. None of them panic, and the empty string
//! simply fails the length-based and character-presence checks.
//! Lengths are counted in UTF-16 code units, which is what a browser
//! reports as an input's length. Characters outside the Basic Multilingual
//! Plane (most emoji) count as two.

/// Characters accepted by [`has_special_char`].
pub const SPECIAL_CHARS: &str = "!@#$%^&*_=+";

/// Characters accepted by [`has_digit`].
pub const DIGITS: &str = "0123456789";

/// Length of `value` in UTF-16 code units.
///
/// ```rust
/// use formcheck::core::primitives::utf16_len;
///
/// assert_eq!(utf16_len("abc"), 3);
/// assert_eq!(utf16_len("äöü"), 3);
/// assert_eq!(utf16_len("😀"), 2);
/// ```
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// True iff `value` has at least `n` characters.
///
/// ```rust
/// use formcheck::core::primitives::min_length;
///
/// assert!(!min_length("ab", 3));
/// assert!(min_length("abc", 3));
/// ```
pub fn min_length(value: &str, n: usize) -> bool {
    utf16_len(value) >= n
}

/// True iff `value` has at most `n` characters.
pub fn max_length(value: &str, n: usize) -> bool {
    utf16_len(value) <= n
}

/// True iff lowercasing `value` changes it.
///
/// A string without letters, or one already in lowercase, fails.
///
/// ```rust
/// use formcheck::core::primitives::has_mixed_case;
///
/// assert!(has_mixed_case("Abc"));
/// assert!(!has_mixed_case("abc"));
/// assert!(!has_mixed_case("123!"));
/// ```
pub fn has_mixed_case(value: &str) -> bool {
    value.to_lowercase() != value
}

/// True iff `value` contains an uppercase character.
pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(char::is_uppercase)
}

/// True iff `value` contains one of [`DIGITS`].
pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| DIGITS.contains(c))
}

/// True iff `value` contains one of [`SPECIAL_CHARS`].
pub fn has_special_char(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// True iff `value` equals `other` exactly.
pub fn equals_other(value: &str, other: &str) -> bool {
    value == other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_length_counts_characters() {
        assert!(!min_length("", 1));
        assert!(min_length("a", 1));
        assert!(!min_length("abcdefg", 8));
        assert!(min_length("abcdefgh", 8));
        assert!(min_length("", 0));
    }

    #[test]
    fn min_length_counts_bmp_characters_as_one_unit() {
        assert!(min_length("äöü", 3));
        assert!(!min_length("äö", 3));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        assert_eq!(utf16_len("😀😀😀😀"), 8);
        assert!(min_length("😀😀😀😀", 8));
        assert!(!min_length("😀😀😀", 8));
        assert!(!max_length("😀😀", 3));
    }

    #[test]
    fn max_length_is_inclusive() {
        assert!(max_length("abc", 3));
        assert!(!max_length("abcd", 3));
        assert!(max_length("", 0));
    }

    #[test]
    fn mixed_case_requires_lowercasing_to_change_value() {
        assert!(has_mixed_case("Alllower1!"));
        assert!(has_mixed_case("ALLUPPER"));
        assert!(!has_mixed_case("alllower1!"));
        assert!(!has_mixed_case("12345678"));
        assert!(!has_mixed_case(""));
    }

    #[test]
    fn uppercase_detects_any_capital() {
        assert!(has_uppercase("aB"));
        assert!(!has_uppercase("ab1!"));
    }

    #[test]
    fn digit_scans_fixed_set() {
        assert!(has_digit("abc1"));
        assert!(!has_digit("abc"));
        assert!(!has_digit(""));
    }

    #[test]
    fn special_char_scans_fixed_set() {
        for c in SPECIAL_CHARS.chars() {
            assert!(has_special_char(&format!("abc{c}")));
        }
        assert!(!has_special_char("abc-?."));
        assert!(!has_special_char(""));
    }

    #[test]
    fn equals_other_is_strict() {
        assert!(equals_other("Secret1!", "Secret1!"));
        assert!(!equals_other("Secret1!", "secret1!"));
        assert!(equals_other("", ""));
    }
}
