//! Configuration for the contact book
//!
//! Resolution order for the data file:
//! 1. `--file` flag or `CONTACT_BOOK_FILE` environment variable
//! 2. `contacts_file` in the JSON config file (`--config`, or
//!    `<config dir>/contact-book/config.json` when present)
//! 3. `contacts.json` in the current directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_CONTACTS_FILE;

pub const APP_NAME: &str = "contact-book";
const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the contacts
    pub contacts_file: PathBuf,

    /// Style menu output when writing to a terminal
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE), color: true }
    }
}

impl Config {
    /// Platform config file location, e.g. `~/.config/contact-book/config.json` on Linux
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or from the default location, or use defaults
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command line overrides on top of the loaded config
    pub fn with_overrides(mut self, contacts_file: Option<PathBuf>, no_color: bool) -> Self {
        if let Some(file) = contacts_file {
            self.contacts_file = file;
        }
        if no_color {
            self.color = false;
        }
        self
    }
}
