//! Record model representing one contact in the address book.

use crate::domain::{parse_opt, Birthday, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction and identifies the record inside an
/// [`AddressBook`](crate::book::AddressBook). Phone numbers keep their
/// insertion order and never contain duplicate values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name, unique within a book
    name: String,

    /// Phone numbers in insertion order, duplicate-free
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with initial phones and an optional birthday.
    ///
    /// Phones are added through the same path as [`Record::add_phone`], so
    /// duplicates in the initial list collapse silently. The empty string
    /// means "no birthday".
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any phone or the birthday is malformed;
    /// nothing is constructed in that case.
    pub fn with_details<I, S>(
        name: impl Into<String>,
        phones: I,
        birthday: &str,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new(name);
        for phone in phones {
            record.add_phone(phone.as_ref())?;
        }
        record.birthday = parse_opt(birthday)?;
        Ok(record)
    }

    /// Contact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number.
    ///
    /// Adding a value that is already present is a no-op, so the list stays
    /// duplicate-free.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for malformed input; the
    /// phone list is unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<&mut Self, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(self)
    }

    /// Remove the phone number with exactly this value, if present.
    pub fn remove_phone(&mut self, phone: &str) -> &mut Self {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == phone) {
            self.phones.remove(pos);
        }
        self
    }

    /// Replace the phone number `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `new` is malformed, or
    /// `BookError::PhoneNotFound` if no phone equals `old`. Either way the
    /// phone list is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<&mut Self> {
        let new = PhoneNumber::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(self)
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// Find the phone number with exactly this value.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Find the first phone number containing `text` as a substring.
    pub fn find_substring(&self, text: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.contains(text))
    }

    /// Replace the birthday with a freshly validated value.
    ///
    /// The empty string clears it. A malformed value leaves the previous
    /// birthday in place.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<&mut Self, ValidationError> {
        self.birthday = parse_opt(birthday)?;
        Ok(self)
    }

    /// Days until the next occurrence of this contact's birthday, counted
    /// from the local date today. `None` when the birthday is unset.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(chrono::Local::now().date_naive())
    }

    /// Days until the next birthday occurrence counted from `today`.
    ///
    /// See [`Birthday::days_until`] for the same-day and Feb 29 rules.
    pub fn days_to_birthday_from(&self, today: chrono::NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
