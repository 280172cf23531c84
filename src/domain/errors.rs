//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid `dd.mm.yyyy` date.
    InvalidDate(String),

    /// The provided page size is not a positive integer.
    InvalidPageSize(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidDate(date) => write!(f, "Invalid birthday date: {}", date),
            Self::InvalidPageSize(n) => write!(f, "Invalid page size: {}", n),
        }
    }
}

impl std::error::Error for ValidationError {}
