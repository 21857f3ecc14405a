//! Email syntax validation.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Check whether `input` looks like an email address.
///
/// The local part may contain letters, digits and `._%+-`; the domain must
/// contain at least one `.` and end in a top-level label of two or more
/// letters. Missing or empty input is never valid.
///
/// # Example
///
/// ```
/// use hire_portal_core::validation::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email(None));
/// ```
pub fn is_valid_email<'a>(input: impl Into<Option<&'a str>>) -> bool {
    match input.into() {
        Some(email) if !email.is_empty() => EMAIL_REGEX.is_match(email),
        _ => false,
    }
}
