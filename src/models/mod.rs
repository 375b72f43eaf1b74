//! Data models for the contact book.
//!
//! - [`Contact`] - A stored person record, as persisted in the JSON data file
//! - [`ContactUpdate`] - Optional replacement fields for an update
//!
//! Timestamps go through the custom deserializers in [`deserializers`] so that
//! data files written with either RFC3339 strings or Unix milliseconds load.

pub mod contact;
pub mod deserializers;

pub use contact::{Contact, ContactUpdate};
