use thiserror::Error;

use crate::models::contact::ContactId;
use crate::validation::ValidationError;

/// Errors returned by [`RecordStore`](super::RecordStore) mutations
///
/// None of these are fatal: the store is left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No contact found with ID: {id}")]
    NotFound { id: ContactId },

    #[error("Failed to save contacts: {0:#}")]
    Persistence(anyhow::Error),
}
