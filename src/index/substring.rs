use std::collections::{HashMap, HashSet};
use std::iter;

use log::debug;

use crate::models::Contact;
use crate::models::contact::ContactId;

/// Normalizes names and queries the same way: trimmed and lowercased
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Every distinct non-empty substring of `text`, split on character boundaries
fn substrings(text: &str) -> HashSet<&str> {
    let boundaries: Vec<usize> =
        text.char_indices().map(|(offset, _)| offset).chain(iter::once(text.len())).collect();

    let mut result = HashSet::with_capacity(boundaries.len() * boundaries.len() / 2);
    for (i, &start) in boundaries.iter().enumerate() {
        for &end in &boundaries[i + 1..] {
            result.insert(&text[start..end]);
        }
    }
    result
}

/// Maps name substrings to the IDs of the contacts whose name contains them
///
/// The key set is closed under taking substrings: if `k` is a key, so is every
/// substring of `k`. A query contained in any key is therefore itself a key, and
/// its entry already holds the union of every key that contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstringIndex {
    entries: HashMap<String, HashSet<ContactId>>,
}

impl SubstringIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `contacts` from scratch
    pub fn build<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Self {
        let mut index = Self::new();
        index.rebuild(contacts);
        index
    }

    /// Drop every entry and re-index `contacts`
    pub fn rebuild<'a>(&mut self, contacts: impl IntoIterator<Item = &'a Contact>) {
        self.entries.clear();
        let mut count = 0;
        for contact in contacts {
            self.extend(&contact.id, &contact.name);
            count += 1;
        }
        debug!("Rebuilt substring index: {} contacts, {} keys", count, self.entries.len());
    }

    /// Index one contact's name under its ID
    pub fn extend(&mut self, id: &str, name: &str) {
        let name = normalize(name);
        for key in substrings(&name) {
            match self.entries.get_mut(key) {
                Some(ids) => {
                    ids.insert(id.to_string());
                }
                None => {
                    self.entries.insert(key.to_string(), HashSet::from([id.to_string()]));
                }
            }
        }
    }

    /// Undo [`extend`](Self::extend) for one contact; `name` must be the name it was indexed with
    pub fn remove(&mut self, id: &str, name: &str) {
        let name = normalize(name);
        for key in substrings(&name) {
            if let Some(ids) = self.entries.get_mut(key) {
                ids.remove(id);
                if ids.is_empty() {
                    self.entries.remove(key);
                }
            }
        }
    }

    /// IDs of contacts whose normalized name contains the normalized query
    ///
    /// A blank query matches nothing here; listing everyone is the caller's job.
    pub fn search(&self, query: &str) -> HashSet<&str> {
        let query = normalize(query);
        if query.is_empty() {
            return HashSet::new();
        }
        self.entries
            .get(query.as_str())
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of distinct substrings indexed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
