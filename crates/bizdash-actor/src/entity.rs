//! # Record Trait
//!
//! The `Record` trait is the contract every business record (Customer, Product, Sale,
//! Expense, ...) implements to be owned by a generic [`RecordActor`](crate::RecordActor).
//! It names the identifier, the create/update payloads, the record-specific actions and
//! the error type, and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`).
//!
//! # Associated Types
//! A `Customer` is created from a `CustomerCreate` payload and can never be handed a
//! `ProductCreate`: the payloads are associated types, so the compiler rejects the mix-up.
//!
//! # Provided Methods (Hooks)
//! - [`Record::on_create`]
//! - [`Record::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be stored by a `RecordActor`.
///
/// # Identifiers
/// Ids are allocated by the actor from a sequential `u32` counter (starting at 1) and
/// converted with `From<u32>`. Ids must be `Ord`: the store lists records in id order,
/// which is creation order.
///
/// # Async & Context
/// Hooks are async so they can consult other stores. The `Context` type is injected by
/// [`RecordActor::run`](crate::RecordActor::run) rather than at construction time.
#[async_trait]
pub trait Record: Clone + Send + Sync + 'static {
    /// Typed identifier, e.g. `CustomerId(u32)`.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations beyond CRUD (e.g. `AdjustStock`).
    type Action: Send + Sync + Debug;

    /// Result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` when there are none.
    type Context: Send + Sync;

    /// Per-record error type.
    ///
    /// One enum covers every operation on the record rather than one per action; a
    /// caller matching on `ProductError` handles everything a product store can report.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the full record from its allocated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handles a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

/// Action type for records that have no operations beyond CRUD.
///
/// It has no variants, so `handle_action` can be implemented as `match action {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {}
