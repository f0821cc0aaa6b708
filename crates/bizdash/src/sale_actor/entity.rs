//! [`Record`] implementation for [`Sale`].

use super::actions::{SaleAction, SaleActionResult};
use super::SaleError;
use crate::model::{Sale, SaleCreate, SaleId, SaleUpdate};
use async_trait::async_trait;
use bizdash_actor::Record;

#[async_trait]
impl Record for Sale {
    type Id = SaleId;
    type Create = SaleCreate;
    type Update = SaleUpdate;
    type Action = SaleAction;
    type ActionResult = SaleActionResult;
    type Context = ();
    type Error = SaleError;

    fn from_create(id: SaleId, params: SaleCreate) -> Result<Self, SaleError> {
        Ok(Sale::new(id, params))
    }

    /// Replaces the invoice body and recomputes its totals.
    async fn on_update(&mut self, update: SaleUpdate, _ctx: &()) -> Result<(), SaleError> {
        self.replace(update);
        Ok(())
    }

    async fn handle_action(&mut self, action: SaleAction, _ctx: &()) -> Result<SaleActionResult, SaleError> {
        match action {
            SaleAction::SetPaymentStatus(status) => {
                let previous = std::mem::replace(&mut self.payment_status, status);
                Ok(SaleActionResult::SetPaymentStatus(previous))
            }
        }
    }
}
