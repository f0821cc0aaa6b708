//! # Customer Client
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use bizdash_actor::{RecordClient, Repository, StoreError};
use tracing::{debug, instrument};

/// Client for the customer store.
#[derive(Clone)]
pub struct CustomerClient {
    inner: RecordClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: RecordClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Repository<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &RecordClient<Customer> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        CustomerError::from(e)
    }
}

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
