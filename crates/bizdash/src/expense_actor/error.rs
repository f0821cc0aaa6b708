use bizdash_actor::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpenseError {
    #[error("Expense not found: {0}")]
    NotFound(String),

    #[error("Store communication error: {0}")]
    StoreCommunication(String),
}

impl From<StoreError> for ExpenseError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ExpenseError::NotFound(id),
            other => ExpenseError::StoreCommunication(other.to_string()),
        }
    }
}
