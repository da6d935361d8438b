//! # Actor Framework
//!
//! Building blocks for putting a single-threaded aggregate behind an async,
//! cloneable handle. The aggregate keeps plain synchronous `&mut self` methods; the
//! framework serializes every request through one Tokio task so that concurrent
//! callers can never interleave inside an operation.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the aggregate and the actions it accepts
//! 2. **Runtime Layer** ([`ResourceActor`]) - sequential message processing
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Concurrency Model
//!
//! - One actor owns one aggregate, inside its own Tokio task
//! - Requests are processed strictly one after another, so every action is atomic
//!   with respect to every other action
//! - Clients are cheap clones of an mpsc sender; dropping the last one stops the actor
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from canned expectations, so client
//! wrappers can be tested without building a real aggregate.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
