//! # Repository Trait
//!
//! The record-agnostic interface that domain clients expose to callers. A domain
//! client wraps a `RecordClient<T>`, chooses its own error type, and inherits
//! `get`, `list` and `delete`. Creation and updates stay on the domain client,
//! where the payloads are named after the record.
use crate::{Record, RecordClient, StoreError};
use async_trait::async_trait;

/// Standard read/delete operations for a record repository.
///
/// # Example
///
/// ```rust
/// use bizdash_actor::{NoAction, Record, RecordClient, Repository, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("tag error: {0}")] struct TagError(String);
///
/// #[async_trait]
/// impl Record for Tag {
///     type Id = u32; type Create = TagCreate; type Update = TagUpdate;
///     type Action = NoAction; type ActionResult = (); type Context = (); type Error = TagError;
///     fn from_create(id: u32, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), TagError> { Ok(()) }
///     async fn handle_action(&mut self, action: NoAction, _: &()) -> Result<(), TagError> { match action {} }
/// }
///
/// struct TagClient { inner: RecordClient<Tag> }
///
/// #[async_trait]
/// impl Repository<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &RecordClient<Tag> { &self.inner }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), list() and delete() come from the trait.
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Record-specific error type.
    type Error: Send + Sync;

    /// The underlying generic client.
    fn inner(&self) -> &RecordClient<T>;

    /// Maps store errors to the record's error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// All records in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
