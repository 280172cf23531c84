//! Error types for the rolodex crate.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain validation errors live in [`crate::domain::errors`] and
//! are wrapped here at the book level.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while saving or loading an address book snapshot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not valid JSON or does not match the schema
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The snapshot was written by an unknown format version
    #[error("Unsupported snapshot version: {found}")]
    UnsupportedVersion { found: u32 },

    /// The snapshot parsed but its contents violate a book invariant
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// Errors that can occur during address book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit does not exist on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Saving or loading the book failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
