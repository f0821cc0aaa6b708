//! Error types for the customer store.

use bizdash_actor::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer does not exist.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// The store could not be reached or failed the request.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<StoreError> for CustomerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => CustomerError::NotFound(id),
            other => CustomerError::StoreCommunication(other.to_string()),
        }
    }
}
