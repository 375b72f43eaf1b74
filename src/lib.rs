//! Contact Book - a single-user contact book with substring search
//!
//! Contacts (name, phone, email) live in a JSON file and are managed through a
//! [`RecordStore`]. Every contiguous substring of every contact's lowercased
//! name is kept in a [`SubstringIndex`], so "name contains" searches are served
//! from the index rather than by scanning contacts.
//!
//! - Validating and normalizing contact fields
//! - Create, update, delete, list and search over an ID-keyed store
//! - Atomic JSON persistence behind the [`ContactStorage`] port
//! - An interactive numbered menu and a small command line
//!
//! # Example
//!
//! ```no_run
//! use contact_book::{JsonFileStorage, RecordStore};
//!
//! let mut store = RecordStore::open(JsonFileStorage::new("contacts.json"))?;
//! store.create("Jane Doe", "+1 555-123-4567", "jane@example.com")?;
//! for contact in store.search("ne do") {
//!     println!("{} <{}>", contact.name, contact.email);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod index;
pub mod models;
pub mod store;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use index::SubstringIndex;
pub use models::{Contact, ContactUpdate};
pub use store::{ContactStorage, JsonFileStorage, RecordStore, StoreError};
pub use validation::ValidationError;
