//! PhoneNumber value object.

use super::errors::ValidationError;
use crate::validation::{normalize_phone_number, CANONICAL_PHONE_PREFIX};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A Philippine mobile number held in canonical `+639XXXXXXXXX` form.
///
/// Normalization only checks the prefix and length, so the ten characters
/// after `+63` are not guaranteed to be ASCII digits.
///
/// Any input accepted by [`normalize_phone_number`] can be used to build
/// one, so two `PhoneNumber`s compare equal exactly when the inputs they
/// were built from are equivalent.
///
/// # Example
///
/// ```
/// use hire_portal_core::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0917-123-4567").unwrap();
/// assert_eq!(phone.as_str(), "+639171234567");
/// assert_eq!(phone.display(), "(+63) 917 123 4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from any normalizable form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input does not normalize.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        match normalize_phone_number(phone.as_str()) {
            Some(canonical) => Ok(Self(canonical)),
            None => Err(ValidationError::InvalidPhone(phone)),
        }
    }

    /// Get the canonical form as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The ten-character national number, `9XXXXXXXXX`.
    pub fn national_number(&self) -> &str {
        self.0
            .strip_prefix(CANONICAL_PHONE_PREFIX)
            .unwrap_or(self.0.as_str())
    }

    /// Render as `(+63) 9XX XXX XXXX`.
    pub fn display(&self) -> String {
        let national = self.national_number();
        let group = |skip: usize, take: usize| -> String {
            national.chars().skip(skip).take(take).collect()
        };
        format!(
            "({}) {} {} {}",
            CANONICAL_PHONE_PREFIX,
            group(0, 3),
            group(3, 3),
            group(6, 4)
        )
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserializing normalizes, so any accepted input form round-trips to canonical
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
