//! Generic string helpers.

/// Return `value` unless it is missing or contains only whitespace, in which
/// case `fallback` is returned.
///
/// A non-blank `value` is returned unchanged, surrounding whitespace included.
pub fn default_if_blank<'a>(value: impl Into<Option<&'a str>>, fallback: &'a str) -> &'a str {
    match value.into() {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_if_blank() {
        assert_eq!(default_if_blank("Acme Corp", "N/A"), "Acme Corp");
        assert_eq!(default_if_blank("  padded ", "N/A"), "  padded ");
        assert_eq!(default_if_blank("", "N/A"), "N/A");
        assert_eq!(default_if_blank(" \t\n", "N/A"), "N/A");
        assert_eq!(default_if_blank(None, "N/A"), "N/A");
    }
}
