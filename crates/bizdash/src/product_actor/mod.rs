//! # Product Actor
//!
//! The inventory store. Besides CRUD it supports two stock actions:
//!
//! ```rust,ignore
//! // Current level, without changing anything
//! let level = product_client.check_stock(id).await?;
//!
//! // Receive (+) or sell (-) units; the stock status is re-derived
//! let level = product_client.adjust_stock(id, -3).await?;
//! ```
//!
//! The stock status stored on a product follows the fixed thresholds of
//! [`StockStatus::from_quantity`](crate::model::StockStatus::from_quantity) and is
//! recomputed on every create, update and adjustment. `low_stock` in a [`StockLevel`]
//! compares against the product's own reorder level instead.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::config::DashboardConfig;
use crate::model::Product;
use bizdash_actor::RecordActor;

/// Creates the product actor and its client.
pub fn new(config: &DashboardConfig) -> (RecordActor<Product>, ProductClient) {
    let (actor, client) = RecordActor::new(config.channel_capacity);
    (actor.with_latency(config.latency()), ProductClient::new(client))
}
