//! Error types for the product store.

use bizdash_actor::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product does not exist.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The store could not be reached or failed the request.
    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<StoreError> for ProductError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::StoreCommunication(other.to_string()),
        }
    }
}
