//! # Generic Messages
//!
//! Messages exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<T>;

/// Request sent to the actor.
///
/// - **Action**: run one domain operation and answer with its result.
/// - **Snapshot**: answer with a clone of the whole aggregate, for read-only
///   inspection outside the actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Action {
        action: T::Action,
        respond_to: Response<Result<T::ActionResult, T::Error>>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
}
