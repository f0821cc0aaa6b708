//! # Expense Actor
//!
//! The expense store. Expenses are standalone: no actions, no context.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ExpenseClient;
use crate::config::DashboardConfig;
use crate::model::Expense;
use bizdash_actor::RecordActor;

/// Creates the expense actor and its client.
pub fn new(config: &DashboardConfig) -> (RecordActor<Expense>, ExpenseClient) {
    let (actor, client) = RecordActor::new(config.channel_capacity);
    (actor.with_latency(config.latency()), ExpenseClient::new(client))
}
