//! # System Lifecycle
//!
//! Starting and stopping the registry actor, and the logging setup that goes with it.
//!
//! ## The RegistrySystem Pattern
//!
//! [`RegistrySystem`] owns the actor task and the client that talks to it:
//!
//! 1. **Create** the actor and its client from a [`RegistryConfig`](crate::config::RegistryConfig)
//! 2. **Spawn** the actor in its own Tokio task
//! 3. **Use** the client (clone it freely, every clone talks to the same registry)
//! 4. **Shut down** by dropping the client and awaiting the task, which hands back
//!    the final [`Registry`](crate::registry::Registry)
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor exits** - Logs how many requests it handled and returns its state
//! 4. **Await completion** - `shutdown` resolves with that state
//!
//! Requests already queued when the last client goes away are still answered.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use tracing::*;
