//! rolodex - A local-first personal address book.
//!
//! This library provides a validated contact data model with paginated
//! browsing, substring search, and atomic snapshot persistence. It is a
//! single-process, single-user data structure: no network layer, no
//! interior locking, no background work.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for phone numbers and birthdays
//! - **models**: The contact [`Record`] (name, phones, birthday)
//! - **book**: The insertion-ordered [`AddressBook`] collection with
//!   pagination and search
//! - **storage**: Snapshot persistence behind the [`BookStore`] trait
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Stderr logging setup for embedding applications
//!
//! # Example
//!
//! ```
//! use rolodex::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! book.add_record(Record::with_details("John", ["1234567890"], "18.02.1990").unwrap());
//!
//! let john = book.find_by_name_mut("John").unwrap();
//! john.add_phone("5555555555").unwrap();
//!
//! assert_eq!(book.find("555").len(), 1);
//! ```

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod storage;

pub use book::{AddressBook, DEFAULT_PAGE_SIZE};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, PersistenceError, PersistenceResult};
pub use models::Record;
pub use storage::{BookStore, JsonFileStore};
