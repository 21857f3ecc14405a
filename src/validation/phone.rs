//! Philippine mobile number validation and normalization.
//!
//! The validator is deliberately permissive: it accepts any of the forms a
//! user is likely to type. Normalization only understands the four
//! prefix/length forms, so the parenthesized display form
//! `(+63) 917 123 4567` is valid but does not normalize.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Prefix shared by every canonical phone number.
pub const CANONICAL_PHONE_PREFIX: &str = "+63";

static PHONE_FORMS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^9[0-9]{9}$",
        r"^09[0-9]{9}$",
        r"^639[0-9]{9}$",
        r"^\+639[0-9]{9}$",
        r"^\(\+63\) [0-9]{3} [0-9]{3} [0-9]{4}$",
        r"^(\+63|0)9[0-9]{9}$",
    ])
    .expect("Failed to compile phone number regex set")
});

/// Check whether `input` is a Philippine mobile number in any accepted form.
///
/// Surrounding whitespace is ignored. Accepted forms:
/// - `9XXXXXXXXX`
/// - `09XXXXXXXXX`
/// - `639XXXXXXXXX`
/// - `+639XXXXXXXXX`
/// - `(+63) 9XX XXX XXXX`
pub fn is_valid_philippine_phone_number<'a>(input: impl Into<Option<&'a str>>) -> bool {
    match input.into() {
        Some(phone) => PHONE_FORMS.is_match(phone.trim()),
        None => false,
    }
}

/// Normalize a phone number to the canonical `+639XXXXXXXXX` form.
///
/// Hyphens and whitespace are stripped first. Returns `None` when the cleaned
/// value is not one of `+639…` (13 chars), `639…` (12), `09…` (11) or
/// `9…` (10). The mapping is pure prefix substitution: the characters after
/// the prefix are carried over unchecked.
///
/// # Example
///
/// ```
/// use hire_portal_core::validation::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("0917-123-4567").as_deref(), Some("+639171234567"));
/// assert_eq!(normalize_phone_number("(+63) 917 123 4567"), None);
/// ```
pub fn normalize_phone_number<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    let cleaned: String = input
        .into()?
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    let len = cleaned.chars().count();

    let national = if let Some(rest) = cleaned.strip_prefix("+63") {
        (len == 13).then_some(rest)?
    } else if let Some(rest) = cleaned.strip_prefix("63") {
        (len == 12).then_some(rest)?
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        (len == 11).then_some(rest)?
    } else {
        (len == 10).then_some(cleaned.as_str())?
    };

    if !national.starts_with('9') {
        return None;
    }

    Some(format!("{}{}", CANONICAL_PHONE_PREFIX, national))
}

/// Check whether two inputs denote the same phone number.
///
/// Both sides must normalize; two unparseable values are never equivalent.
pub fn are_phone_numbers_equivalent<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
) -> bool {
    match (normalize_phone_number(a), normalize_phone_number(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_forms() {
        assert!(is_valid_philippine_phone_number("9171234567"));
        assert!(is_valid_philippine_phone_number("09171234567"));
        assert!(is_valid_philippine_phone_number("639171234567"));
        assert!(is_valid_philippine_phone_number("+639171234567"));
        assert!(is_valid_philippine_phone_number("(+63) 917 123 4567"));
        assert!(is_valid_philippine_phone_number("  09171234567  "));
    }

    #[test]
    fn test_invalid_forms() {
        assert!(!is_valid_philippine_phone_number(""));
        assert!(!is_valid_philippine_phone_number(None));
        assert!(!is_valid_philippine_phone_number("123"));
        assert!(!is_valid_philippine_phone_number("8171234567"));
        assert!(!is_valid_philippine_phone_number("0817123456"));
        assert!(!is_valid_philippine_phone_number("+6391712345678"));
        assert!(!is_valid_philippine_phone_number("0917-123-4567"));
        assert!(!is_valid_philippine_phone_number("+1 555 123 4567"));
        // Non-ASCII digits are not accepted
        assert!(!is_valid_philippine_phone_number("９171234567"));
    }

    #[test]
    fn test_normalize_each_form() {
        let expected = Some("+639171234567".to_string());
        assert_eq!(normalize_phone_number("+639171234567"), expected);
        assert_eq!(normalize_phone_number("639171234567"), expected);
        assert_eq!(normalize_phone_number("09171234567"), expected);
        assert_eq!(normalize_phone_number("9171234567"), expected);
    }

    #[test]
    fn test_normalize_strips_hyphens_and_whitespace() {
        let expected = Some("+639171234567".to_string());
        assert_eq!(normalize_phone_number("0917-123-4567"), expected);
        assert_eq!(normalize_phone_number(" +63 917 123 4567 "), expected);
        assert_eq!(normalize_phone_number("63\t917-123\n4567"), expected);
    }

    #[test]
    fn test_normalize_rejects() {
        assert_eq!(normalize_phone_number(None), None);
        assert_eq!(normalize_phone_number(""), None);
        assert_eq!(normalize_phone_number("123"), None);
        assert_eq!(normalize_phone_number("(+63) 917 123 4567"), None);
        assert_eq!(normalize_phone_number("091712345678"), None);
        assert_eq!(normalize_phone_number("0817123456a"), None);
        assert_eq!(normalize_phone_number("+638171234567"), None);
        assert_eq!(normalize_phone_number("+6391712345"), None);
    }

    #[test]
    fn test_normalize_only_checks_prefix_and_length() {
        assert_eq!(
            normalize_phone_number("+639abcdefghi").as_deref(),
            Some("+639abcdefghi")
        );
        assert_eq!(
            normalize_phone_number("09ABCDEFGHI").as_deref(),
            Some("+639ABCDEFGHI")
        );
        assert_eq!(
            normalize_phone_number("917123456x").as_deref(),
            Some("+63917123456x")
        );
        assert!(are_phone_numbers_equivalent("0917abc4567", "+63917abc4567"));
        // Length counts characters, not bytes
        assert_eq!(
            normalize_phone_number("9１２３４５６７８９").as_deref(),
            Some("+639１２３４５６７８９")
        );
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["09171234567", "639181112222", "9190001111", "+639201234567"] {
            let once = normalize_phone_number(input).unwrap();
            assert_eq!(normalize_phone_number(once.as_str()), Some(once.clone()));
        }
    }

    #[test]
    fn test_equivalence() {
        assert!(are_phone_numbers_equivalent("09171234567", "+639171234567"));
        assert!(are_phone_numbers_equivalent("639171234567", "9171234567"));
        assert!(!are_phone_numbers_equivalent("123", "456"));
        assert!(!are_phone_numbers_equivalent("123", "123"));
        assert!(!are_phone_numbers_equivalent("09171234567", "09171234568"));
        assert!(!are_phone_numbers_equivalent(None, "09171234567"));
        assert!(!are_phone_numbers_equivalent(None, None));
    }
}
