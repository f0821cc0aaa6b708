//! # Record Actor
//!
//! The `RecordActor` owns the in-memory store for one record type and processes
//! every request for it sequentially in its own Tokio task.

use crate::client::RecordClient;
use crate::entity::Record;
use crate::error::StoreError;
use crate::message::RecordRequest;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a record store.
///
/// The actor owns `store` exclusively; all access goes through its channel, so no
/// `Mutex` or `RwLock` is involved. One actor exists per record type.
///
/// # Usage Pattern
///
/// 1.  **Create**: `RecordActor::new()` returns the actor and a `RecordClient`.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use bizdash_actor::{NoAction, Record, RecordActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate { text: String }
/// #[derive(Debug)] struct NoteError;
/// impl std::fmt::Display for NoteError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "note error") }
/// }
/// impl std::error::Error for NoteError {}
///
/// #[async_trait]
/// impl Record for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.text })
///     }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), NoteError> {
///         self.text = update.text;
///         Ok(())
///     }
///     async fn handle_action(&mut self, action: NoAction, _: &()) -> Result<(), NoteError> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(id, 1);
///     assert_eq!(client.list().await.unwrap().len(), 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: allocates the next id, calls `Record::from_create`, then `on_create`,
///   then inserts.
/// * **Get**: clone of the stored record, or `None`.
/// * **List**: clones of all records in id order.
/// * **Update**: runs `on_update` on a copy and stores the copy only if the hook succeeds.
/// * **Delete**: runs `on_delete`, then removes.
/// * **Action**: runs `handle_action` on a copy and stores the copy only on success.
///
/// When a latency is configured, every request except `Get` and `List` waits that
/// long before it is applied. Actions are always delayed, even read-only ones such
/// as a stock check. This stands in for the round trip to a real backend.
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
    latency: Option<Duration>,
}

impl<T: Record> RecordActor<T> {
    /// Creates a new `RecordActor` and its `RecordClient`.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
            latency: None,
        };
        let client = RecordClient::new(sender);
        (actor, client)
    }

    /// Delays every mutating request by `latency`. A zero duration disables the delay.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is passed to every hook of every record in this store.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type_name::<T>();
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            if msg.is_mutation() {
                if let Some(latency) = self.latency {
                    debug!(entity_type, op = msg.kind(), ?latency, "Delaying");
                    tokio::time::sleep(latency).await;
                }
            }
            self.handle(msg, &context, entity_type).await;
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle(&mut self, msg: RecordRequest<T>, context: &T::Context, entity_type: &str) {
        match msg {
            RecordRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let id = T::Id::from(self.next_id);
                self.next_id += 1;

                let mut item = match T::from_create(id.clone(), params) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(entity_type, error = %e, "Create failed");
                        let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                        return;
                    }
                };
                if let Err(e) = item.on_create(context).await {
                    warn!(entity_type, error = %e, "on_create failed");
                    let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                    return;
                }
                self.store.insert(id.clone(), item);
                info!(entity_type, %id, size = self.store.len(), "Created");
                let _ = respond_to.send(Ok(id));
            }
            RecordRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            RecordRequest::List { respond_to } => {
                debug!(entity_type, size = self.store.len(), "List");
                let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
            }
            RecordRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let Some(current) = self.store.get(&id) else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    return;
                };
                let mut next = current.clone();
                if let Err(e) = next.on_update(update, context).await {
                    warn!(entity_type, %id, error = %e, "Update failed");
                    let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                    return;
                }
                self.store.insert(id.clone(), next.clone());
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(next));
            }
            RecordRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let Some(item) = self.store.get(&id) else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    return;
                };
                if let Err(e) = item.on_delete(context).await {
                    warn!(entity_type, %id, error = %e, "on_delete failed");
                    let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                    return;
                }
                self.store.remove(&id);
                info!(entity_type, %id, size = self.store.len(), "Deleted");
                let _ = respond_to.send(Ok(()));
            }
            RecordRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                let Some(current) = self.store.get(&id) else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    return;
                };
                let mut next = current.clone();
                match next.handle_action(action, context).await {
                    Ok(result) => {
                        self.store.insert(id.clone(), next);
                        info!(entity_type, %id, "Action ok");
                        let _ = respond_to.send(Ok(result));
                    }
                    Err(e) => {
                        warn!(entity_type, %id, error = %e, "Action failed");
                        let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                    }
                }
            }
        }
    }
}

/// Last path segment of the record type name, e.g. "Customer".
fn entity_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
