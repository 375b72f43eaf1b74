//! Contact storage: the authoritative record store and its persistence port
//!
//! [`RecordStore`] owns every contact, keyed by ID, plus the display order and
//! the substring index. Each mutation is written through a [`ContactStorage`]
//! before it becomes visible; if the write fails the change is rolled back.
//!
//! [`JsonFileStorage`] keeps the contacts as a pretty-printed JSON array and
//! replaces the file atomically (temp file + rename) on every save.

pub mod error;
pub mod persistence;
pub mod record_store;

pub use error::StoreError;
pub use persistence::{ContactStorage, DEFAULT_CONTACTS_FILE, JsonFileStorage};
pub use record_store::RecordStore;
