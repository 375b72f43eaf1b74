//! Contact persistence: JSON file load/save with atomic writes

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::models::Contact;

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Load/save port used by [`RecordStore`](super::RecordStore)
///
/// `save` always receives the complete contact list in display order.
pub trait ContactStorage {
    fn load(&mut self) -> Result<Vec<Contact>>;
    fn save(&mut self, contacts: &[&Contact]) -> Result<()>;
}

/// Stores contacts as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the data file lives in (temp files are created there so rename stays atomic)
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn read_contacts(&self) -> Result<Vec<Contact>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read contacts file: {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse contacts file: {}", self.path.display()))
    }

    /// Start from an empty book, writing `[]` when the file can be replaced
    fn reset(&mut self) -> Vec<Contact> {
        if let Err(e) = self.save(&[]) {
            warn!("{:#}; continuing with an unsaved empty contact book", e);
        }
        Vec::new()
    }
}

impl ContactStorage for JsonFileStorage {
    /// Load contacts, initializing the file when it is missing
    ///
    /// A file that cannot be read or parsed is replaced by an empty list. Its
    /// previous contents are lost. Failing to write that empty list is logged
    /// and does not fail the load.
    fn load(&mut self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            info!("Contacts file not found, creating {}", self.path.display());
            return Ok(self.reset());
        }

        match self.read_contacts() {
            Ok(contacts) => {
                debug!("Loaded {} contacts from {}", contacts.len(), self.path.display());
                Ok(contacts)
            }
            Err(e) => {
                warn!("{:#}; starting with an empty contact book", e);
                Ok(self.reset())
            }
        }
    }

    /// Replace the file contents atomically (temp file + rename)
    fn save(&mut self, contacts: &[&Contact]) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let mut json =
            serde_json::to_string_pretty(contacts).context("Failed to serialize contacts")?;
        json.push('\n');

        // Dropping the temp file on any early return removes it
        let mut temp = NamedTempFile::new_in(dir).context("Failed to create contacts temp file")?;
        temp.write_all(json.as_bytes()).context("Failed to write contacts temp file")?;
        temp.as_file().sync_all().context("Failed to sync contacts temp file")?;
        temp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace contacts file: {}", self.path.display()))?;

        debug!("Saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }
}
