//! # Customer Actor
//!
//! The customer store: plain CRUD, no actions and no dependencies (`Context = ()`).
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](bizdash_actor::Record) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`new()`] - creates the actor and its [`CustomerClient`]
//!
//! ## Usage
//!
//! ```rust
//! use bizdash::clients::CustomerClient;
//! use bizdash::config::DashboardConfig;
//! use bizdash::customer_actor;
//! use bizdash::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_actor::new(&DashboardConfig::default());
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_customer(CustomerCreate {
//!             name: "John Smith".to_string(),
//!             email: Some("john.smith@example.com".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     assert_eq!(id.to_string(), "c1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::config::DashboardConfig;
use crate::model::Customer;
use bizdash_actor::RecordActor;

/// Creates the customer actor and its client.
pub fn new(config: &DashboardConfig) -> (RecordActor<Customer>, CustomerClient) {
    let (actor, client) = RecordActor::new(config.channel_capacity);
    (actor.with_latency(config.latency()), CustomerClient::new(client))
}
