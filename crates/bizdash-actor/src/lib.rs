//! # bizdash-actor
//!
//! A typed, in-memory record store built on Tokio actors. Every record type
//! (customers, products, sales, expenses, ...) is owned by one [`RecordActor`] task that
//! processes requests sequentially; callers hold a cloneable [`RecordClient`] and talk to
//! it over a channel. That channel is the asynchronous call boundary of the system:
//! code written against a client works unchanged whether the store answers instantly,
//! after a configured latency, or (in tests) from a [`mock::MockStore`].
//!
//! ## Layers
//!
//! 1. **Record Layer** ([`Record`]) - the record's data, payloads and hooks
//! 2. **Runtime Layer** ([`RecordActor`]) - message loop and exclusive state
//! 3. **Interface Layer** ([`RecordClient`], [`Repository`]) - typed async calls
//!
//! ## Operations
//!
//! Every store supports `create`, `get`, `list`, `update`, `delete` and a record-specific
//! `perform_action`. `list` returns records in creation order.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`RecordActor::run`], not to [`RecordActor::new`], so two
//! stores can be created first and wired to each other afterwards.
//!
//! ## Concurrency Model
//!
//! - One Tokio task per store
//! - Requests are handled one at a time; no locks around the store
//! - Different stores run in parallel
//! - Shutdown: drop every client, then await the task
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers a real `RecordClient` from scripted expectations, for
//! fast deterministic tests of the code around a client.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;
pub mod tracing;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use entity::{NoAction, Record};
pub use error::StoreError;
pub use message::{RecordRequest, Response};
pub use repository::Repository;
