//! # Store Errors
//!
//! Errors raised by the record store itself, independent of any record type.

/// Errors that can occur while talking to a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record store closed")]
    ActorClosed,
    #[error("Record store dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    Record(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
