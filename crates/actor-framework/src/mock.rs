//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of expectations instead of by a running aggregate. Use it to test the
//! logic *around* a client (argument packing, result unpacking, error mapping) without
//! building the aggregate's state first.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | None (expectations) | Real aggregate |
//! | **Use Case** | Client wrappers | The aggregate itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires building the failing state |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Tally { total: u64 }
//! #[derive(Debug)] enum TallyAction { Add(u64) }
//! #[derive(Debug, thiserror::Error)]
//! enum TallyError {
//!     #[error("too large")]
//!     TooLarge,
//!     #[error(transparent)]
//!     Framework(#[from] FrameworkError),
//! }
//!
//! impl ActorEntity for Tally {
//!     type Action = TallyAction;
//!     type ActionResult = u64;
//!     type Error = TallyError;
//!     fn handle_action(&mut self, action: TallyAction) -> Result<u64, TallyError> {
//!         let TallyAction::Add(n) = action;
//!         self.total += n;
//!         Ok(self.total)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tally>::new();
//!     mock.expect_action().return_ok(42);
//!     mock.expect_action().return_err(TallyError::TooLarge);
//!
//!     let client = mock.client();
//!     assert_eq!(client.perform_action(TallyAction::Add(1)).await.unwrap(), 42);
//!     assert!(matches!(
//!         client.perform_action(TallyAction::Add(1)).await,
//!         Err(TallyError::TooLarge)
//!     ));
//!     mock.verify();
//! }
//! ```
//!
//! ## Inspecting requests
//!
//! When the test needs to look at the action the client built, use
//! [`create_mock_client`] and answer by hand with [`expect_action`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned answer to it.
enum Expectation<T: ActorEntity> {
    Action {
        response: Result<T::ActionResult, T::Error>,
    },
    Snapshot {
        response: T,
    },
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request, answered with `state`.
    pub fn expect_snapshot(&mut self, state: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: state });
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Answer the action with a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Ok(result),
            });
    }

    /// Answer the action with an error.
    pub fn return_err(self, error: T::Error) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                response: Err(error),
            });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests: the test pulls them with [`expect_action`] or
/// [`expect_snapshot`], asserts on them, and replies through the returned sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Action, Response<Result<T::ActionResult, T::Error>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a Snapshot.
pub async fn expect_snapshot<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<T>> {
    match receiver.recv().await {
        Some(ResourceRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
