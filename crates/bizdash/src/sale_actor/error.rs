use bizdash_actor::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    #[error("Sale not found: {0}")]
    NotFound(String),

    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<StoreError> for SaleError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => SaleError::NotFound(id),
            other => SaleError::StoreCommunication(other.to_string()),
        }
    }
}
