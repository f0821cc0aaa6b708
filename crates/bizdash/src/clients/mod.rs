//! Typed clients for each record store.
//!
//! Each client wraps a [`RecordClient`](bizdash_actor::RecordClient), implements
//! [`Repository`](bizdash_actor::Repository) for `get`, `list` and `delete`, and adds
//! create/update methods named after its record plus wrappers for the record's actions.

pub mod customer_client;
pub mod expense_client;
pub mod product_client;
pub mod sale_client;

pub use customer_client::CustomerClient;
pub use expense_client::ExpenseClient;
pub use product_client::ProductClient;
pub use sale_client::SaleClient;
