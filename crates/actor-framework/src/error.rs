//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, independent of the aggregate
//! the actor owns. Domain error types convert these with `From`.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
