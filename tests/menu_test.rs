/// Interactive menu sessions driven through in-memory input and output
mod common;

use std::io::Cursor;

use contact_book::cli::{Menu, Painter};
use contact_book::{JsonFileStorage, RecordStore};
use common::{DataDirBuilder, open_store, sample_store};

/// Run one menu session over `input` and return everything it printed
fn run_session(store: &mut RecordStore<JsonFileStorage>, input: &str) -> String {
    let mut output = Vec::new();
    Menu::new(store, Cursor::new(input.to_string()), &mut output, Painter::new(false))
        .run()
        .expect("menu session failed");
    String::from_utf8(output).expect("menu output is UTF-8")
}

#[test]
fn test_exit_immediately() {
    let dir = DataDirBuilder::new().build();
    let mut store = open_store(&dir.path().join("contacts.json"));

    let output = run_session(&mut store, "6\n");
    assert!(output.contains("=== Contact Book ==="));
    assert!(output.contains("1. Create contact"));
    assert!(output.contains("6. Exit"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = DataDirBuilder::new().build();
    let mut store = open_store(&dir.path().join("contacts.json"));

    let output = run_session(&mut store, "");
    assert!(output.contains("Goodbye!"));

    // Input ending in the middle of a create prompt also ends the session
    let output = run_session(&mut store, "1\nJane Doe\n");
    assert!(output.contains("Phone: "));
    assert!(output.contains("Goodbye!"));
    assert!(store.is_empty());
}

#[test]
fn test_invalid_choice_reprints_menu() {
    let dir = DataDirBuilder::new().build();
    let mut store = open_store(&dir.path().join("contacts.json"));

    let output = run_session(&mut store, "9\nhello\n6\n");
    assert_eq!(output.matches("Invalid choice").count(), 2);
    assert_eq!(output.matches("=== Contact Book ===").count(), 3);
}

#[test]
fn test_create_and_display_all() {
    let dir = DataDirBuilder::new().build();
    let mut store = open_store(&dir.path().join("contacts.json"));

    let output = run_session(&mut store, "1\nJane Doe\n+1 555-123-4567\njane@example.com\n3\n6\n");

    assert!(output.contains("Contact created."));
    assert!(output.contains("All contacts (1)"));
    assert!(output.contains("Name:    Jane Doe"));
    assert!(output.contains("Email:   jane@example.com"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_create_validation_error_keeps_running() {
    let dir = DataDirBuilder::new().build();
    let mut store = open_store(&dir.path().join("contacts.json"));

    let output = run_session(&mut store, "1\n   \n+1 555-123-4567\njane@example.com\n1\nJane\n123\njane@example.com\n3\n6\n");

    assert!(output.contains("Error: Name cannot be empty"));
    assert!(output.contains("Error: Invalid phone number: '123'"));
    assert!(output.contains("No contacts found."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_search_prints_matches_and_misses() {
    let dir = DataDirBuilder::new().build();
    let mut store = sample_store(&dir.path().join("contacts.json"));

    let output = run_session(&mut store, "2\nne do\n2\nxyz\n2\n\n6\n");

    assert!(output.contains("Found 1 contact(s):"));
    assert!(output.contains("Name:    Jane Doe"));
    assert!(output.contains("No contacts match 'xyz'."));
    assert!(output.contains("Found 5 contact(s):"));
}

#[test]
fn test_update_with_blank_fields_keeps_values() {
    let dir = DataDirBuilder::new().build();
    let mut store = sample_store(&dir.path().join("contacts.json"));
    let jane = store.search("jane")[0].clone();

    let input = format!("4\n{}\n\n+1 555-000-0000\n\n6\n", jane.id);
    let output = run_session(&mut store, &input);

    assert!(output.contains("Name [Jane Doe]: "));
    assert!(output.contains("Contact updated."));
    assert!(output.contains("Updated: "));
    let updated = store.get(&jane.id).unwrap();
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.phone, "+1 555-000-0000");
    assert_eq!(updated.email, jane.email);
    assert!(updated.updated_at.is_some());
}

#[test]
fn test_update_unknown_id_reports_not_found() {
    let dir = DataDirBuilder::new().build();
    let mut store = sample_store(&dir.path().join("contacts.json"));

    let output = run_session(&mut store, "4\nmissing-id\n6\n");

    assert!(output.contains("Error: No contact found with ID: missing-id"));
    assert!(!output.contains("Leave a field blank"));
}

#[test]
fn test_delete_by_id() {
    let dir = DataDirBuilder::new().build();
    let mut store = sample_store(&dir.path().join("contacts.json"));
    let ada = store.search("ada")[0].clone();

    let input = format!("5\n  {}  \n5\n{}\n6\n", ada.id, ada.id);
    let output = run_session(&mut store, &input);

    assert!(output.contains("Deleted Ada Lovelace."));
    assert!(output.contains(&format!("Error: No contact found with ID: {}", ada.id)));
    assert_eq!(store.len(), 4);
    assert!(store.search("lovelace").is_empty());
}

#[test]
fn test_windows_line_endings() {
    let dir = DataDirBuilder::new().build();
    let mut store = open_store(&dir.path().join("contacts.json"));

    run_session(&mut store, "1\r\nJane Doe\r\n5551234567\r\njane@example.com\r\n6\r\n");

    assert_eq!(store.list()[0].email, "jane@example.com");
}

#[test]
fn test_stored_escape_sequences_are_not_printed() {
    let data = DataDirBuilder::new().with_contacts(&[common::ContactJsonBuilder::new("evil")
        .name("Mallory \\u001b[2J")]);
    let path = data.contacts_path();
    let _dir = data.build();
    let mut store = open_store(&path);

    let output = run_session(&mut store, "3\n6\n");
    assert!(output.contains("Name:    Mallory"));
    assert!(!output.contains('\x1b'));
}
