//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract an aggregate implements to be owned by a
//! [`ResourceActor`](crate::ResourceActor). The actor holds exactly one value of the
//! aggregate and feeds it actions one at a time, so the aggregate's own methods can
//! stay synchronous and take `&mut self` without any locking.
//!
//! # Architecture Note
//! The aggregate decides what its operations are (`Action`) and what they return
//! (`ActionResult`). The framework only decides *when* they run: strictly in arrival
//! order, each one to completion before the next. Any check-then-act sequence inside
//! `handle_action` is therefore atomic with respect to every other request.

use crate::error::FrameworkError;
use std::fmt::Debug;

/// Trait that an aggregate must implement to be managed by `ResourceActor`.
///
/// # Error Granularity
///
/// One error type covers every action of the aggregate. It must absorb
/// [`FrameworkError`] so clients can surface a closed actor through the same type
/// as a domain rejection.
pub trait ActorEntity: Clone + Send + 'static {
    /// Enum of the operations the aggregate accepts.
    type Action: Send + Debug;

    /// Result returned by a successful action.
    type ActionResult: Send + Debug;

    /// The error type for this aggregate.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Apply one action to the aggregate.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
