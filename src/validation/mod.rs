//! Field validation for contact records
//!
//! Fields are trimmed before they are checked. The patterns match the ones the
//! data file format has always used, so existing data files stay valid:
//!
//! - Phone: optional leading `+`, then at least 10 digits, spaces or hyphens
//! - Email: `local@domain.tld`, case-insensitive
//! - Name: anything non-blank

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").expect("phone pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Za-z0-9_+\-.]+@[a-z0-9-]+(\.[a-z0-9-]+)*\.[a-z]+$")
        .expect("email pattern compiles")
});

/// A contact field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error(
        "Invalid phone number: '{phone}' (expected at least 10 digits, spaces or hyphens, optionally starting with '+')"
    )]
    InvalidPhone { phone: String },

    #[error("Invalid email address: '{email}'")]
    InvalidEmail { email: String },
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::InvalidPhone { phone: phone.to_string() });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail { email: email.to_string() });
    }
    Ok(())
}

/// Validates all three fields of a new contact, name first
pub fn validate_contact(name: &str, phone: &str, email: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_phone(phone)?;
    validate_email(email)
}
