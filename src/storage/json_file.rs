//! JSON file snapshot store.

use super::BookStore;
use crate::book::AddressBook;
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The self-describing on-disk form of a book.
///
/// Records are stored in insertion order, so order survives the round trip.
/// The pagination cursor is deliberately absent: it is transient state.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    page_size: usize,
    records: Vec<Record>,
}

/// Snapshot store writing pretty-printed JSON files.
///
/// Saves go through a temp file in the destination directory followed by a
/// rename, so a crash mid-write can never leave a half-written file that
/// later loads successfully.
#[derive(Debug, Default)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }

    /// Sibling temp path used during a save: `<path>.tmp`.
    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("snapshot"));
        name.push(".tmp");
        path.with_file_name(name)
    }
}

impl BookStore for JsonFileStore {
    fn save(&self, book: &AddressBook, path: &Path) -> PersistenceResult<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            page_size: book.page_size(),
            records: book.iter().cloned().collect(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp = Self::tmp_path(path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;

        tracing::debug!(
            "Saved {} records to {}",
            snapshot.records.len(),
            path.display()
        );
        Ok(())
    }

    fn load(&self, path: &Path) -> PersistenceResult<AddressBook> {
        let content = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: snapshot.version,
            });
        }

        let mut book = AddressBook::with_page_size(snapshot.page_size)
            .map_err(|e| PersistenceError::Corrupt(e.to_string()))?;
        for record in snapshot.records {
            book.add_record(record);
        }

        tracing::debug!("Loaded {} records from {}", book.len(), path.display());
        Ok(book)
    }
}
