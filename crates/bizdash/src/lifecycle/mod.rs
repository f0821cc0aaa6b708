//! # System Lifecycle
//!
//! Creates the four record stores, starts each on its own Tokio task, and shuts them
//! down again. The stores have no dependencies on each other, so every actor runs
//! with the empty context `()`.
//!
//! ```rust,ignore
//! let config = DashboardConfig::load_or_default(None)?;
//! let system = BusinessSystem::new(&config);
//!
//! let id = system.customer_client.create_customer(params).await?;
//! let summary = ReportSummary::build(&system.snapshot().await?);
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! 1. Drop every client; each store's channel closes.
//! 2. Each actor drains what is left in its queue and exits its loop.
//! 3. Await every task. A task that panicked is reported as [`SystemError::ActorFailed`].
//!
//! Clones of a client handed out earlier keep their store alive until they are
//! dropped too.

pub mod business_system;

pub use business_system::*;
