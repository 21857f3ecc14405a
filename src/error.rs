//! Error types for the hire portal core.
//!
//! Selection and validation operations are total and never fail; the only
//! fallible surface is configuration loading, defined here with `thiserror`.
//! Value-object construction errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
