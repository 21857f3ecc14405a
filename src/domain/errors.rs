//! Errors raised when building domain value objects from raw input.

use thiserror::Error;

/// Why a raw value could not become a domain value object.
///
/// Variants that carry a value keep the rejected input as typed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Application ids are opaque keys and must not be empty.
    #[error("application id must not be empty")]
    EmptyId,

    /// The value failed the email syntax check.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// The value matched none of the `+639`/`639`/`09`/`9` mobile forms.
    #[error("'{0}' is not a Philippine mobile number that can be normalized to +639XXXXXXXXX")]
    InvalidPhone(String),
}
