//! # Sale Client
use crate::model::{PaymentStatus, Sale, SaleCreate, SaleId, SaleUpdate};
use crate::sale_actor::{SaleAction, SaleActionResult, SaleError};
use async_trait::async_trait;
use bizdash_actor::{RecordClient, Repository, StoreError};
use tracing::{debug, instrument};

/// Client for the sale store.
#[derive(Clone)]
pub struct SaleClient {
    inner: RecordClient<Sale>,
}

impl SaleClient {
    pub fn new(inner: RecordClient<Sale>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Repository<Sale> for SaleClient {
    type Error = SaleError;

    fn inner(&self) -> &RecordClient<Sale> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        SaleError::from(e)
    }
}

impl SaleClient {
    #[instrument(skip(self, params), fields(customer = %params.customer_name, items = params.items.len()))]
    pub async fn create_sale(&self, params: SaleCreate) -> Result<SaleId, SaleError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the invoice body of an existing sale.
    #[instrument(skip(self, update), fields(items = update.items.len()))]
    pub async fn update_sale(&self, id: SaleId, update: SaleUpdate) -> Result<Sale, SaleError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Sets the payment status and returns the previous one.
    #[instrument(skip(self))]
    pub async fn set_payment_status(
        &self,
        id: SaleId,
        status: PaymentStatus,
    ) -> Result<PaymentStatus, SaleError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, SaleAction::SetPaymentStatus(status))
            .await
            .map_err(Self::map_error)?
        {
            SaleActionResult::SetPaymentStatus(previous) => Ok(previous),
        }
    }
}
