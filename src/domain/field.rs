//! Validated field parsing.
//!
//! Contact attributes are stored as typed value objects, never as raw
//! strings. This module defines the parsing contract those value objects
//! share, plus helpers for optional fields where user input uses the empty
//! string to mean "not set". The option lives in the type (`Option<T>`), so
//! an absent field is never represented by a sentinel value downstream.

use super::errors::ValidationError;

/// A contact attribute that is parsed from, and rendered back to, a
/// canonical string form.
///
/// Parsing is all-or-nothing: a failed `parse` constructs nothing and the
/// caller's previous value is untouched.
pub trait FieldValue: Sized {
    /// Parse a non-empty raw string into a validated value.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// Render the value in its canonical string form.
    fn render(&self) -> String;
}

/// Parse an optional field, treating the empty string as absent.
pub fn parse_opt<T: FieldValue>(raw: &str) -> Result<Option<T>, ValidationError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        T::parse(raw).map(Some)
    }
}

/// Render an optional field, with absence rendered as the empty string.
pub fn render_opt<T: FieldValue>(value: Option<&T>) -> String {
    value.map(T::render).unwrap_or_default()
}
