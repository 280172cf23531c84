//! Birthday value object.

use super::errors::ValidationError;
use super::field::FieldValue;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The textual form birthdays are parsed from and rendered to.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for a contact's birthday.
///
/// Stored as a calendar date, not a string. The canonical textual form is
/// `dd.mm.yyyy` (e.g. `07.06.1984`), and a value always renders back to it.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("18.02.1990").unwrap();
/// assert_eq!(birthday.to_string(), "18.02.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from its `dd.mm.yyyy` form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string is not a valid
    /// calendar date in that format.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// Always in `[0, 366)`. A birthday falling on `today` returns 0.
    /// A Feb 29 birthday is observed on Mar 1 in common years.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let this_year = self.occurrence_in(today.year());

        if this_year < today {
            (self.occurrence_in(today.year() + 1) - today).num_days()
        } else {
            (this_year - today).num_days()
        }
    }

    /// The date this birthday is observed in `year`.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
    }
}

impl FieldValue for Birthday {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

// Serde support - serialize in the canonical dd.mm.yyyy form
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from dd.mm.yyyy with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
