//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real `RecordClient<T>` whose requests are answered from a
//! queue of expectations instead of a running actor. Use it to test logic that sits
//! *around* a client (domain clients, editors, report builders) without spawning stores.
//!
//! | Feature | MockStore | Real Actor |
//! |---------|-----------|------------|
//! | **Speed** | Instant | Fast (one tokio task) |
//! | **State** | None, scripted replies | Real store |
//! | **Error Injection** | `return_err` | Needs specific state |
//!
//! ```rust
//! use bizdash_actor::mock::MockStore;
//! use bizdash_actor::{NoAction, Record, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagCreate;
//! #[derive(Debug)] struct TagUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl Record for Tag {
//!     type Id = u32; type Create = TagCreate; type Update = TagUpdate;
//!     type Action = NoAction; type ActionResult = (); type Context = (); type Error = TagError;
//!     fn from_create(id: u32, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), TagError> { Ok(()) }
//!     async fn handle_action(&mut self, action: NoAction, _: &()) -> Result<(), TagError> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Tag>::new();
//!     mock.expect_list().return_ok(vec![Tag { id: 1 }]);
//!     mock.expect_get(2).return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert!(matches!(client.get(2).await, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation's kind, or names a different id, panics the mock task, and the client then sees
//! `StoreError::ActorDropped`.

use crate::client::RecordClient;
use crate::entity::Record;
use crate::error::StoreError;
use crate::message::RecordRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply. Id-bearing expectations only answer a request for that id.
enum Expectation<T: Record> {
    Create {
        response: Result<T::Id, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: Record>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .expect("mock expectation queue poisoned")
        .push_back(expectation);
}

fn check_id<I: PartialEq + std::fmt::Display>(kind: &str, expected: &I, actual: &I) {
    if expected != actual {
        panic!("{kind} expected for {expected} but requested for {actual}");
    }
}

/// A scripted record store for tests.
pub struct MockStore<T: Record> {
    client: RecordClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, next) {
                    (RecordRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        check_id("Get", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: expected, response })) => {
                        check_id("Update", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        check_id("Delete", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: expected, response })) => {
                        check_id("Action", &expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected {} request or expectation mismatch", request.kind());
                    }
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// A client wired to this mock.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Action { id, response })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with either a success or an error reply.
pub struct ExpectationBuilder<T: Record, R> {
    queue: Queue<T>,
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    fn new(
        queue: &Queue<T>,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            queue: queue.clone(),
            make: Box::new(make),
        }
    }

    pub fn return_ok(self, value: R) {
        push(&self.queue, (self.make)(Ok(value)));
    }

    pub fn return_err(self, error: StoreError) {
        push(&self.queue, (self.make)(Err(error)));
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client plus the raw receiver, for tests that inspect the exact request
/// (payload, action) before answering it.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (RecordClient<T>, mpsc::Receiver<RecordRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Create, crate::Response<T::Id>)> {
    match receiver.recv().await {
        Some(RecordRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn expect_update<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Id, T::Update, crate::Response<T>)> {
    match receiver.recv().await {
        Some(RecordRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: Record>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Id, T::Action, crate::Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(RecordRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
