//! Integration tests for paginated iteration over the book.

use rolodex::{AddressBook, Record};

fn book_of(n: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..n {
        book.add_record(
            Record::with_details(format!("contact{:02}", i), ["1111111111"], "").unwrap(),
        );
    }
    book
}

/// Collect one full pass of pages as vectors of names.
fn one_pass(book: &mut AddressBook) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    while let Some(page) = book.next_page() {
        pages.push(page.iter().map(|r| r.name().to_string()).collect());
    }
    pages
}

#[test]
fn test_page_count_and_coverage() {
    // 10 records at the default page size of 3: 4 pages, last one short.
    let mut book = book_of(10);
    let pages = one_pass(&mut book);

    assert_eq!(pages.len(), 4);
    assert_eq!(pages[0].len(), 3);
    assert_eq!(pages[3].len(), 1);

    // Concatenating the pages reproduces the full book in insertion order.
    let flattened: Vec<_> = pages.into_iter().flatten().collect();
    let expected: Vec<_> = book.iter().map(|r| r.name().to_string()).collect();
    assert_eq!(flattened, expected);
}

#[test]
fn test_exhausted_iteration_restarts() {
    let mut book = book_of(5);

    let first_pass = one_pass(&mut book);
    let second_pass = one_pass(&mut book);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_page_size_divides_evenly() {
    let mut book = book_of(6);
    let pages = one_pass(&mut book);
    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|p| p.len() == 3));
}

#[test]
fn test_custom_page_size() {
    let mut book = book_of(10);
    book.set_page_size(5).unwrap();

    let pages = one_pass(&mut book);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 5);
}

#[test]
fn test_page_size_larger_than_book() {
    let mut book = book_of(2);
    book.set_page_size(50).unwrap();

    let pages = one_pass(&mut book);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].len(), 2);
}

#[test]
fn test_single_record_pages() {
    let mut book = book_of(3);
    book.set_page_size(1).unwrap();

    let pages = one_pass(&mut book);
    assert_eq!(pages.len(), 3);
}

#[test]
fn test_deletion_mid_iteration_is_visible() {
    let mut book = book_of(6);

    let first = book.next_page().unwrap();
    assert_eq!(first.len(), 3);

    // Deleting a not-yet-visited record shrinks the remaining pages.
    book.delete("contact04");
    let second = book.next_page().unwrap();
    let names: Vec<_> = second.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["contact03", "contact05"]);
}

#[test]
fn test_empty_book_yields_no_pages() {
    let mut book = AddressBook::new();
    assert!(book.next_page().is_none());
    assert!(book.next_page().is_none());
}
