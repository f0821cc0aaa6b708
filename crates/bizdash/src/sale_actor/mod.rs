//! # Sale Actor
//!
//! The invoice store. Creating or updating a sale recomputes its line totals and
//! invoice totals from the submitted items, so a stored sale is always consistent
//! with [`crate::invoice::compute_totals`].
//!
//! Sales keep a copy of the customer name and of each product's name and price;
//! nothing here looks up or changes customers or products (`Context = ()`).
//! Saving a sale does not touch stock levels or customer purchase totals.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::SaleClient;
use crate::config::DashboardConfig;
use crate::model::Sale;
use bizdash_actor::RecordActor;

/// Creates the sale actor and its client.
pub fn new(config: &DashboardConfig) -> (RecordActor<Sale>, SaleClient) {
    let (actor, client) = RecordActor::new(config.channel_capacity);
    (actor.with_latency(config.latency()), SaleClient::new(client))
}
