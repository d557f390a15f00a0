//! Store error types

use thiserror::Error;

use super::record::RecordId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Absence of an identifier is the only failure a store operation can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists under the given identifier
    #[error("record {0} not found")]
    NotFound(RecordId),
}

impl StoreError {
    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "RESTBOX_STORE_NOT_FOUND",
        }
    }

    /// The identifier the failed operation referenced
    pub fn id(&self) -> RecordId {
        match self {
            StoreError::NotFound(id) => *id,
        }
    }
}
