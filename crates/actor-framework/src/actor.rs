//! # Generic Actor Server
//!
//! `ResourceActor` owns one aggregate and processes requests for it sequentially.
//! It is the "server" half of the actor model; [`ResourceClient`] is the other half.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an aggregate.
///
/// # Concurrency Model
/// Requests are pulled off the channel one at a time and each runs to completion
/// before the next is read. The aggregate is never shared, so it needs no `Mutex`:
/// exclusive ownership inside the task plays the role of a single lock around the
/// whole aggregate.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new(state, capacity)` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: clone the client wherever requests originate.
///
/// ```rust
/// use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { value: u32 }
///
/// #[derive(Debug)]
/// enum CounterAction { Add(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// enum CounterError {
///     #[error("overflow")]
///     Overflow,
///     #[error(transparent)]
///     Framework(#[from] FrameworkError),
/// }
///
/// impl ActorEntity for Counter {
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Error = CounterError;
///
///     fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
///         match action {
///             CounterAction::Add(n) => {
///                 self.value = self.value.checked_add(n).ok_or(CounterError::Overflow)?;
///                 Ok(self.value)
///             }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::new(Counter::default(), 10);
///     tokio::spawn(actor.run());
///
///     assert_eq!(client.perform_action(CounterAction::Add(2)).await.unwrap(), 2);
///     assert_eq!(client.snapshot().await.unwrap().value, 2);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    state: T,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` around `state` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `state` - The aggregate the actor takes ownership of.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(state: T, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Returns the final state of the aggregate.
    pub async fn run(mut self) -> T {
        // Keep just the type name, e.g. "Registry"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            handled += 1;
            match msg {
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self.state.handle_action(action);
                    match &result {
                        Ok(_) => debug!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Snapshot { respond_to } => {
                    debug!(entity_type, "Snapshot");
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(entity_type, handled, "Shutdown");
        self.state
    }
}
