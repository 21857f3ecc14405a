//! Configuration management for the hire portal core.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::selection::AllSelectedCheck;
use std::env;

/// Default number of hash buckets used for stable bucketing.
pub const DEFAULT_HASH_BUCKET_COUNT: usize = 8;

/// Configuration for the hire portal core.
#[derive(Debug, Clone)]
pub struct Config {
    /// How "everything visible is selected" is decided (default: cardinality)
    pub select_all_check: AllSelectedCheck,

    /// Number of buckets for hash-based bucketing (default: 8)
    pub hash_bucket_count: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SELECT_ALL_CHECK`: `cardinality` or `exact` (default: cardinality)
    /// - `HASH_BUCKET_COUNT`: bucket count, greater than 0 (default: 8)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let select_all_check = match env::var("SELECT_ALL_CHECK") {
            Ok(val) => val.parse::<AllSelectedCheck>().map_err(|reason| {
                ConfigError::InvalidValue {
                    var: "SELECT_ALL_CHECK".to_string(),
                    reason,
                }
            })?,
            Err(_) => AllSelectedCheck::default(),
        };

        let hash_bucket_count =
            Self::parse_env_usize("HASH_BUCKET_COUNT", DEFAULT_HASH_BUCKET_COUNT)?;

        if hash_bucket_count == 0 {
            return Err(ConfigError::InvalidValue {
                var: "HASH_BUCKET_COUNT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            select_all_check,
            hash_bucket_count,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            select_all_check: AllSelectedCheck::default(),
            hash_bucket_count: DEFAULT_HASH_BUCKET_COUNT,
            log_level: "error".to_string(),
        }
    }
}
