//! [`Record`] implementation for [`Customer`].

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use bizdash_actor::{NoAction, Record};

#[async_trait]
impl Record for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        Ok(Customer::new(id, params))
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        self.apply(update);
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &()) -> Result<(), CustomerError> {
        match action {}
    }
}
