use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque unique identifier of a contact
pub type ContactId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(deserialize_with = "crate::models::deserializers::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::deserializers::deserialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Replacement fields for [`RecordStore::update`](crate::store::RecordStore::update)
///
/// `None` and blank values both mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Trimmed value of a supplied field, or `None` when it is absent or blank
pub(crate) fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
