//! Deterministic, non-cryptographic string hashing.
//!
//! The hash walks UTF-16 code units so values line up with the ones the
//! browser computes for the same string. Not collision resistant; use it for
//! stable bucket and key derivation only.

/// Hash a string to an unsigned 32-bit integer.
///
/// Computes `h = h * 31 + unit` over the UTF-16 code units of `input` with
/// wrapping signed 32-bit arithmetic, then reinterprets the result as
/// unsigned. Missing input hashes like the empty string.
///
/// # Example
///
/// ```
/// use hire_portal_core::validation::hash_to_u32;
///
/// assert_eq!(hash_to_u32(""), 0);
/// assert_eq!(hash_to_u32("abc"), 96354);
/// ```
pub fn hash_to_u32<'a>(input: impl Into<Option<&'a str>>) -> u32 {
    let hash = input
        .into()
        .unwrap_or_default()
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash as u32
}

/// Map `input` onto one of `buckets` stable buckets.
///
/// Returns 0 when `buckets` is 0.
pub fn bucket_for<'a>(input: impl Into<Option<&'a str>>, buckets: usize) -> usize {
    if buckets == 0 {
        return 0;
    }
    hash_to_u32(input) as usize % buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(hash_to_u32(""), 0);
        assert_eq!(hash_to_u32(None), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(hash_to_u32("a"), 97);
        assert_eq!(hash_to_u32("abc"), 96354);
        assert_eq!(hash_to_u32("hello"), 99162322);
    }

    #[test]
    fn test_negative_intermediate_reinterpreted_as_unsigned() {
        // Both wrap to a negative i32 before the final reinterpretation
        assert_eq!(hash_to_u32("application-42"), 3007768603);
        assert_eq!(hash_to_u32("polygenelubricants"), 2147483648);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(hash_to_u32("ab"), hash_to_u32("ba"));
    }

    #[test]
    fn test_utf16_units() {
        // U+00E9 is a single code unit, U+1F600 is a surrogate pair
        assert_eq!(hash_to_u32("é"), 0xE9);
        let pair = 0xD83Du32 * 31 + 0xDE00;
        assert_eq!(hash_to_u32("😀"), pair);
    }

    #[test]
    fn test_bucket_for() {
        assert_eq!(bucket_for("abc", 0), 0);
        assert_eq!(bucket_for("abc", 1), 0);
        assert_eq!(bucket_for("abc", 10), 4);
        for name in ["Juan", "Maria", "Jose", ""] {
            assert!(bucket_for(name, 8) < 8);
            assert_eq!(bucket_for(name, 8), bucket_for(name, 8));
        }
    }
}
