use super::ExpenseError;
use crate::model::{Expense, ExpenseCreate, ExpenseId, ExpenseUpdate};
use async_trait::async_trait;
use bizdash_actor::{NoAction, Record};

#[async_trait]
impl Record for Expense {
    type Id = ExpenseId;
    type Create = ExpenseCreate;
    type Update = ExpenseUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Context = ();
    type Error = ExpenseError;

    fn from_create(id: ExpenseId, params: ExpenseCreate) -> Result<Self, ExpenseError> {
        Ok(Expense::new(id, params))
    }

    async fn on_update(&mut self, update: ExpenseUpdate, _ctx: &()) -> Result<(), ExpenseError> {
        self.apply(update);
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &()) -> Result<(), ExpenseError> {
        match action {}
    }
}
