//! # Registry Actor
//!
//! Puts a [`Registry`] behind a [`ResourceActor`] so concurrent callers share one
//! registry. The actor applies requests one at a time, so the validate,
//! authenticate, check and mutate steps of an operation never interleave with
//! another request: two racing registrations of the same handle cannot both pass
//! the duplicate check.
//!
//! ## Structure
//!
//! - [`actions`] - [`RegistryAction`] and [`RegistryActionResult`]
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Registry`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use review_registry::clients::RegistryClient;
//! use review_registry::model::MemberCreate;
//! use review_registry::registry::Registry;
//! use review_registry::registry_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, inner) = registry_actor::new(Registry::new(), 32);
//!     tokio::spawn(actor.run());
//!     let client = RegistryClient::new(inner);
//!
//!     let member = client
//!         .register_member(MemberCreate::new("ada", "secret", "likes maths"))
//!         .await?;
//!     assert_eq!(member.handle(), "ada");
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::registry::Registry;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Registry actor and its client.
pub fn new(
    registry: Registry,
    buffer_size: usize,
) -> (ResourceActor<Registry>, ResourceClient<Registry>) {
    ResourceActor::new(registry, buffer_size)
}
