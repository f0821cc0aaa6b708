//! # Store Messages
//!
//! Request types exchanged between a `RecordClient` and its `RecordActor`.

use crate::entity::Record;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request sent to a record actor.
///
/// The variants are the repository operations every record type supports
/// (create, get, list, update, delete) plus `Action` for record-specific logic.
/// The payload types come from the [`Record`] implementation, so a product store
/// cannot be sent a customer payload.
#[derive(Debug)]
pub enum RecordRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// All records, in creation order.
    List { respond_to: Response<Vec<T>> },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: Record> RecordRequest<T> {
    /// Short operation name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordRequest::Create { .. } => "Create",
            RecordRequest::Get { .. } => "Get",
            RecordRequest::List { .. } => "List",
            RecordRequest::Update { .. } => "Update",
            RecordRequest::Delete { .. } => "Delete",
            RecordRequest::Action { .. } => "Action",
        }
    }

    /// Whether the request may change the store. `Get` and `List` are the only reads;
    /// actions are opaque here, so every action counts as a mutation, including
    /// read-only ones.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            RecordRequest::Get { .. } | RecordRequest::List { .. }
        )
    }
}
