//! # Product Client
//!
//! Inventory operations over the product store, including the stock actions.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, StockLevel};
use async_trait::async_trait;
use bizdash_actor::{RecordClient, Repository, StoreError};
use tracing::{debug, instrument};

/// Client for the product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: RecordClient<Product>,
}

impl ProductClient {
    pub fn new(inner: RecordClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Repository<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &RecordClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a patch; the stock status is re-derived from the resulting quantity.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Current stock level of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<StockLevel, ProductError> {
        debug!(%id, "Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => unreachable!("CheckStock answered with {other:?}"),
        }
    }

    /// Adds `delta` units (negative to remove) and returns the new level.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<StockLevel, ProductError> {
        debug!(%id, delta, "Adjusting stock");
        match self
            .inner
            .perform_action(id, ProductAction::AdjustStock(delta))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::AdjustStock(level) => Ok(level),
            other => unreachable!("AdjustStock answered with {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockStatus;
    use bizdash_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn check_stock_returns_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task = tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);

        let level = StockLevel {
            quantity: 45,
            status: StockStatus::InStock,
            low_stock: false,
        };
        responder.send(Ok(ProductActionResult::CheckStock(level))).unwrap();

        assert_eq!(check_task.await.unwrap(), Ok(level));
    }

    #[tokio::test]
    async fn adjust_stock_sends_delta() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let adjust_task =
            tokio::spawn(async move { product_client.adjust_stock(ProductId(4), -2).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(4));
        assert_eq!(action, ProductAction::AdjustStock(-2));

        let level = StockLevel {
            quantity: 3,
            status: StockStatus::LowStock,
            low_stock: true,
        };
        responder.send(Ok(ProductActionResult::AdjustStock(level))).unwrap();

        assert_eq!(adjust_task.await.unwrap(), Ok(level));
    }

    #[tokio::test]
    async fn adjust_stock_on_missing_product_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let adjust_task =
            tokio::spawn(async move { product_client.adjust_stock(ProductId(99), 1).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(StoreError::NotFound("p99".to_string())))
            .unwrap();

        assert_eq!(
            adjust_task.await.unwrap(),
            Err(ProductError::NotFound("p99".to_string()))
        );
    }

    #[tokio::test]
    async fn dropped_store_is_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(10);
        drop(receiver);

        let result = ProductClient::new(client).check_stock(ProductId(1)).await;
        assert!(matches!(result, Err(ProductError::StoreCommunication(_))));
    }
}
