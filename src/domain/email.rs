//! EmailAddress value object.

use super::errors::ValidationError;
use crate::validation::is_valid_email;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for email addresses.
///
/// Surrounding whitespace is trimmed before validation with
/// [`is_valid_email`].
///
/// # Example
///
/// ```
/// use hire_portal_core::domain::EmailAddress;
///
/// let email = EmailAddress::new(" recruiter@example.com ").unwrap();
/// assert_eq!(email.as_str(), "recruiter@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();

        if !is_valid_email(trimmed) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_trims() {
        let email = EmailAddress::new("  hr@company.ph\n").unwrap();
        assert_eq!(email.as_str(), "hr@company.ph");
    }

    #[test]
    fn test_email_invalid_keeps_original_in_error() {
        assert_eq!(
            EmailAddress::new(" nope "),
            Err(ValidationError::InvalidEmail(" nope ".to_string()))
        );
    }

    #[test]
    fn test_email_parts() {
        let email = EmailAddress::new("user.name@example.co.uk").unwrap();
        assert_eq!(email.local_part(), "user.name");
        assert_eq!(email.domain(), "example.co.uk");
    }

    #[test]
    fn test_email_serde() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"user@example.com\"");

        let parsed: EmailAddress = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(parsed, email);

        let result: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
