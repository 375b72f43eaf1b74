//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use contact_book::{JsonFileStorage, RecordStore};
use tempfile::TempDir;

pub const CONTACTS_FILENAME: &str = "contacts.json";

/// Builder for a temp directory holding a contacts data file
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty directory (no data file yet)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path the data file lives at (whether or not it exists yet)
    pub fn contacts_path(&self) -> PathBuf {
        self.temp_dir.path().join(CONTACTS_FILENAME)
    }

    /// Write the data file with the given raw content
    pub fn with_raw(self, content: &str) -> Self {
        fs::write(self.contacts_path(), content).expect("Failed to write contacts file");
        self
    }

    /// Write the data file as a JSON array of the given contacts
    pub fn with_contacts(self, contacts: &[ContactJsonBuilder]) -> Self {
        let content = contacts.iter().map(|c| c.to_json()).collect::<Vec<_>>().join(",\n");
        self.with_raw(&format!("[\n{}\n]", content))
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one contact object in the data file
pub struct ContactJsonBuilder {
    id: String,
    name: String,
    phone: String,
    email: String,
    created_at: String,
    updated_at: Option<String>,
}

impl ContactJsonBuilder {
    /// Create a contact with default values
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: "Test Contact".to_string(),
            phone: "+1 555-123-4567".to_string(),
            email: "test@example.com".to_string(),
            created_at: r#""2024-01-15T10:30:00.000Z""#.to_string(),
            updated_at: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Set created_at as Unix milliseconds instead of an RFC3339 string
    pub fn created_at_millis(mut self, millis: i64) -> Self {
        self.created_at = millis.to_string();
        self
    }

    /// Set updated_at as an RFC3339 string
    pub fn updated_at(mut self, timestamp: &str) -> Self {
        self.updated_at = Some(format!(r#""{}""#, timestamp));
        self
    }

    /// Convert to a JSON object string
    pub fn to_json(&self) -> String {
        let updated_field =
            self.updated_at.as_ref().map(|u| format!(r#","updated_at":{}"#, u)).unwrap_or_default();

        format!(
            r#"{{"id":"{}","name":"{}","phone":"{}","email":"{}","created_at":{}{}}}"#,
            self.id, self.name, self.phone, self.email, self.created_at, updated_field
        )
    }
}

/// Open a store over the data file at `path`
pub fn open_store(path: &Path) -> RecordStore<JsonFileStorage> {
    RecordStore::open(JsonFileStorage::new(path)).expect("Failed to open store")
}

/// A store with a handful of realistic contacts, in this order
pub fn sample_store(path: &Path) -> RecordStore<JsonFileStorage> {
    let mut store = open_store(path);
    for (name, phone, email) in [
        ("Jane Doe", "+1 555-123-4567", "jane@example.com"),
        ("John Smith", "555 987 6543", "john.smith@mail.example.org"),
        ("Zoë Ångström", "+46 8 123 456 78", "zoe@example.se"),
        ("Ada Lovelace", "+44 20 7946 0958", "ada@analytical.engine.uk"),
        ("Joanna Doeberg", "0123-456-7890", "joanna+work@example.com"),
    ] {
        store.create(name, phone, email).expect("Failed to create sample contact");
    }
    store
}
