use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use super::error::StoreError;
use super::persistence::ContactStorage;
use crate::index::{SubstringIndex, normalize};
use crate::models::contact::{ContactId, supplied};
use crate::models::{Contact, ContactUpdate};
use crate::validation::{validate_contact, validate_email, validate_phone};

/// Authoritative contact collection with a substring index over names
///
/// Contacts are keyed by ID; `order` holds the IDs in insertion order. The
/// index only stores IDs, so deleting a contact never invalidates another
/// contact's entries.
pub struct RecordStore<S: ContactStorage> {
    contacts: HashMap<ContactId, Contact>,
    order: Vec<ContactId>,
    index: SubstringIndex,
    storage: S,
}

impl<S: ContactStorage> RecordStore<S> {
    /// Load every contact from `storage` and index them
    ///
    /// Records repeating an earlier ID are dropped with a warning.
    pub fn open(mut storage: S) -> Result<Self> {
        let loaded = storage.load().context("Failed to load contacts")?;

        let mut contacts = HashMap::with_capacity(loaded.len());
        let mut order = Vec::with_capacity(loaded.len());
        for contact in loaded {
            if contacts.contains_key(&contact.id) {
                warn!("Skipping contact '{}' with duplicate ID {}", contact.name, contact.id);
                continue;
            }
            order.push(contact.id.clone());
            contacts.insert(contact.id.clone(), contact);
        }

        let index = SubstringIndex::build(order.iter().filter_map(|id| contacts.get(id)));
        info!("Opened contact book with {} contacts ({} index keys)", order.len(), index.len());

        Ok(Self { contacts, order, index, storage })
    }

    /// Validate, append and persist a new contact
    pub fn create(&mut self, name: &str, phone: &str, email: &str) -> Result<Contact, StoreError> {
        validate_contact(name, phone, email)?;

        let contact = Contact {
            id: self.generate_id(),
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        self.order.push(contact.id.clone());
        self.contacts.insert(contact.id.clone(), contact.clone());
        if let Err(e) = self.persist() {
            self.order.pop();
            self.contacts.remove(&contact.id);
            return Err(e);
        }

        self.index.extend(&contact.id, &contact.name);
        info!("Created contact {}", contact.id);
        Ok(contact)
    }

    /// Replace the supplied non-blank fields of a contact and stamp `updated_at`
    ///
    /// Supplied phone and email values are validated like `create`; a rejected
    /// value fails with [`StoreError::Validation`] and leaves the contact as it was.
    pub fn update(&mut self, id: &str, changes: &ContactUpdate) -> Result<Contact, StoreError> {
        let previous = self
            .contacts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let mut updated = previous.clone();
        if let Some(name) = supplied(&changes.name) {
            updated.name = name.to_string();
        }
        if let Some(phone) = supplied(&changes.phone) {
            validate_phone(phone)?;
            updated.phone = phone.to_string();
        }
        if let Some(email) = supplied(&changes.email) {
            validate_email(email)?;
            updated.email = email.to_string();
        }
        updated.updated_at = Some(Utc::now());

        self.contacts.insert(updated.id.clone(), updated.clone());
        if let Err(e) = self.persist() {
            self.contacts.insert(previous.id.clone(), previous);
            return Err(e);
        }

        self.index.remove(&previous.id, &previous.name);
        self.index.extend(&updated.id, &updated.name);
        info!("Updated contact {}", updated.id);
        Ok(updated)
    }

    /// Remove a contact and return it
    pub fn delete(&mut self, id: &str) -> Result<Contact, StoreError> {
        let contact =
            self.contacts.remove(id).ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        let position = self.order.iter().position(|candidate| candidate == id);
        if let Some(position) = position {
            self.order.remove(position);
        }

        if let Err(e) = self.persist() {
            if let Some(position) = position {
                self.order.insert(position, contact.id.clone());
            }
            self.contacts.insert(contact.id.clone(), contact);
            return Err(e);
        }

        self.index.remove(&contact.id, &contact.name);
        info!("Deleted contact {}", contact.id);
        Ok(contact)
    }

    /// All contacts in display order
    pub fn list(&self) -> Vec<&Contact> {
        self.order.iter().filter_map(|id| self.contacts.get(id)).collect()
    }

    /// Contacts whose name contains `query` (case-insensitive), in display order
    ///
    /// A blank query returns every contact.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        if normalize(query).is_empty() {
            return self.list();
        }

        let matches = self.index.search(query);
        debug!("Search '{}' matched {} contacts", query.trim(), matches.len());
        self.order
            .iter()
            .filter(|id| matches.contains(id.as_str()))
            .filter_map(|id| self.contacts.get(id))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn index(&self) -> &SubstringIndex {
        &self.index
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let contacts: Vec<&Contact> =
            self.order.iter().filter_map(|id| self.contacts.get(id)).collect();
        self.storage.save(&contacts).map_err(StoreError::Persistence)
    }

    /// UUIDv7: millisecond timestamp plus random bits, re-rolled on the off chance of a clash
    fn generate_id(&self) -> ContactId {
        loop {
            let id = Uuid::now_v7().to_string();
            if !self.contacts.contains_key(&id) {
                return id;
            }
        }
    }
}
