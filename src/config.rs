//! Configuration management for rolodex.
//!
//! This module handles loading and validating configuration from environment
//! variables. Every variable is optional and defaulted, so an embedding
//! application can run with no configuration at all.

use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Snapshot file used when `ROLODEX_DATA_FILE` is unset.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for an embedding application.
///
/// # Example
///
/// ```
/// use rolodex::{AddressBook, Config};
///
/// let config = Config::from_env().unwrap();
/// let book = AddressBook::with_page_size(config.page_size).unwrap();
/// assert!(book.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the snapshot file (default: `addressbook.json`)
    pub data_file: PathBuf,

    /// Records per pagination step (default: 3, must be >= 1)
    pub page_size: usize,

    /// Log level for the stderr subscriber (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_DATA_FILE`: Path of the snapshot file (default: `addressbook.json`)
    /// - `ROLODEX_PAGE_SIZE`: Records per pagination step (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = env::var("ROLODEX_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let page_size = Self::parse_env_usize("ROLODEX_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "error".to_string(),
        }
    }
}
