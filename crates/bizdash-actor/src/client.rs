//! # Record Client
//!
//! The generic async handle for a `RecordActor`.

use crate::entity::Record;
use crate::error::StoreError;
use crate::message::RecordRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `RecordActor<T>`.
///
/// Holds only a channel sender, so cloning is cheap and clones can be moved into
/// other tasks. Every method sends one request and awaits the one-shot reply.
pub struct RecordClient<T: Record> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` bounds on the associated types.
impl<T: Record> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> RecordRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| RecordRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| RecordRequest::Get { id, respond_to })
            .await
    }

    /// All records in creation order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| RecordRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| RecordRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| RecordRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| RecordRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
