//! Integration tests for snapshot persistence.
//!
//! These tests validate the save/load round trip and the failure modes the
//! store promises: corrupt or unreadable files fail loudly and never come
//! back as an empty book.

use rolodex::{AddressBook, PersistenceError, Record};
use std::fs;

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    let mut john = Record::with_details("John", ["3333333333", "4444444444"], "18.02.1990").unwrap();
    john.add_phone("1112223333").unwrap();
    john.add_phone("5555555555").unwrap();
    book.add_record(john);

    let before = book.find_by_name("John").unwrap().to_string();

    book.save_to_file(&path).unwrap();
    book.clear();
    assert!(book.is_empty());

    let loaded = AddressBook::load_from_file(&path).unwrap();
    assert_eq!(loaded.find_by_name("John").unwrap().to_string(), before);
}

#[test]
fn test_round_trip_preserves_order_and_page_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    for i in 1..30 {
        book.add_record(
            Record::with_details(
                format!("fks{}", i),
                ["1111111111", "1111111112"],
                &format!("{:02}.01.1991", i),
            )
            .unwrap(),
        );
    }
    book.set_page_size(5).unwrap();
    book.save_to_file(&path).unwrap();

    let mut loaded = AddressBook::load_from_file(&path).unwrap();
    assert_eq!(loaded.len(), 29);
    assert_eq!(loaded.page_size(), 5);

    let original: Vec<_> = book.iter().map(|r| r.to_string()).collect();
    let restored: Vec<_> = loaded.iter().map(|r| r.to_string()).collect();
    assert_eq!(restored, original);

    // Pagination picks up the persisted page size.
    assert_eq!(loaded.next_page().unwrap().len(), 5);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = AddressBook::load_from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
}

#[test]
fn test_load_corrupt_file_fails_not_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(&path, "{\"version\": 1, \"page_si").unwrap(); // torn write

    let err = AddressBook::load_from_file(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Malformed(_)));
}

#[test]
fn test_load_future_version_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(&path, r#"{"version":2,"page_size":3,"records":[]}"#).unwrap();

    let err = AddressBook::load_from_file(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::UnsupportedVersion { found: 2 }));
}

#[test]
fn test_resave_replaces_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    book.add_record(Record::with_details("First", ["1111111111"], "").unwrap());
    book.save_to_file(&path).unwrap();

    book.clear();
    book.add_record(Record::with_details("Second", ["2222222222"], "").unwrap());
    book.save_to_file(&path).unwrap();

    let loaded = AddressBook::load_from_file(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find_by_name("Second").is_some());
    assert!(loaded.find_by_name("First").is_none());
}

#[test]
fn test_loaded_book_is_independent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    book.add_record(Record::with_details("John", ["1234567890"], "").unwrap());
    book.save_to_file(&path).unwrap();

    let mut loaded = AddressBook::load_from_file(&path).unwrap();
    loaded.delete("John");

    // Mutating the loaded copy does not touch the original.
    assert!(book.find_by_name("John").is_some());
}
