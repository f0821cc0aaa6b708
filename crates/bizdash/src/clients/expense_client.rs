use crate::expense_actor::ExpenseError;
use crate::model::{Expense, ExpenseCreate, ExpenseId, ExpenseUpdate};
use async_trait::async_trait;
use bizdash_actor::{RecordClient, Repository, StoreError};
use tracing::{debug, instrument};

/// Client for the expense store.
#[derive(Clone)]
pub struct ExpenseClient {
    inner: RecordClient<Expense>,
}

impl ExpenseClient {
    pub fn new(inner: RecordClient<Expense>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Repository<Expense> for ExpenseClient {
    type Error = ExpenseError;

    fn inner(&self) -> &RecordClient<Expense> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ExpenseError::from(e)
    }
}

impl ExpenseClient {
    #[instrument(skip(self))]
    pub async fn create_expense(&self, params: ExpenseCreate) -> Result<ExpenseId, ExpenseError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_expense(
        &self,
        id: ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<Expense, ExpenseError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
