//! # ActorClient Trait
//!
//! Shared plumbing for domain-specific clients: a wrapper exposes its inner
//! `ResourceClient` and inherits `perform` and `snapshot`, both instrumented.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain clients built on top of a [`ResourceClient`].
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
///
/// #[derive(Clone, Debug, Default)]
/// struct Guestbook { names: Vec<String> }
///
/// #[derive(Debug)]
/// enum GuestbookAction { Sign(String) }
///
/// #[derive(Debug, thiserror::Error)]
/// enum GuestbookError {
///     #[error("empty name")]
///     EmptyName,
///     #[error(transparent)]
///     Framework(#[from] FrameworkError),
/// }
///
/// impl ActorEntity for Guestbook {
///     type Action = GuestbookAction;
///     type ActionResult = usize;
///     type Error = GuestbookError;
///
///     fn handle_action(&mut self, action: GuestbookAction) -> Result<usize, GuestbookError> {
///         let GuestbookAction::Sign(name) = action;
///         if name.is_empty() {
///             return Err(GuestbookError::EmptyName);
///         }
///         self.names.push(name);
///         Ok(self.names.len())
///     }
/// }
///
/// struct GuestbookClient { inner: ResourceClient<Guestbook> }
///
/// impl ActorClient<Guestbook> for GuestbookClient {
///     fn inner(&self) -> &ResourceClient<Guestbook> {
///         &self.inner
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = ResourceActor::new(Guestbook::default(), 4);
///     tokio::spawn(actor.run());
///     let client = GuestbookClient { inner };
///
///     assert_eq!(client.perform(GuestbookAction::Sign("ada".into())).await.unwrap(), 1);
///     assert!(client.perform(GuestbookAction::Sign(String::new())).await.is_err());
///     assert_eq!(client.snapshot().await.unwrap().names, vec!["ada".to_string()]);
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Run one action on the aggregate.
    #[tracing::instrument(skip(self))]
    async fn perform(&self, action: T::Action) -> Result<T::ActionResult, T::Error> {
        tracing::debug!("Sending request");
        self.inner().perform_action(action).await
    }

    /// Fetch a copy of the aggregate.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, T::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Into::into)
    }
}
