//! [`Record`] implementation for [`Product`], including the stock actions.

use super::actions::{ProductAction, ProductActionResult, StockLevel};
use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, StockStatus};
use async_trait::async_trait;
use bizdash_actor::Record;

#[async_trait]
impl Record for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Product::new(id, params))
    }

    /// Applies the patch and re-derives the stock status.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        self.apply(update);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(StockLevel::from(&*self))),
            ProductAction::AdjustStock(delta) => {
                self.stock_quantity += delta;
                self.status = StockStatus::from_quantity(self.stock_quantity);
                Ok(ProductActionResult::AdjustStock(StockLevel::from(&*self)))
            }
        }
    }
}
