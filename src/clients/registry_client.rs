//! # Registry Client
//!
//! High-level API over a `ResourceClient<Registry>`: one typed async method per
//! registry operation, so callers never touch [`RegistryAction`] directly.
use crate::model::{
    BookCreate, Credentials, FilmCreate, ItemQuery, Member, MemberCreate, ReviewCreate,
};
use crate::registry::{Registry, RegistryError, RegistrySummary};
use crate::registry_actor::{RegistryAction, RegistryActionResult};
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Registry actor.
#[derive(Clone)]
pub struct RegistryClient {
    inner: ResourceClient<Registry>,
}

impl RegistryClient {
    pub fn new(inner: ResourceClient<Registry>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Registry> for RegistryClient {
    fn inner(&self) -> &ResourceClient<Registry> {
        &self.inner
    }
}

/// The actor answered with a result that does not belong to the action sent.
fn mismatched(action: &str, result: RegistryActionResult) -> RegistryError {
    RegistryError::ActorCommunicationError(format!(
        "{action} answered with unexpected result {result:?}"
    ))
}

impl RegistryClient {
    /// Register a new member; returns the stored member.
    #[instrument(skip(self))]
    pub async fn register_member(&self, params: MemberCreate) -> Result<Member, RegistryError> {
        debug!("Sending request");
        match self.perform(RegistryAction::Register(params)).await? {
            RegistryActionResult::Register(member) => Ok(member),
            other => Err(mismatched("Register", other)),
        }
    }

    /// Check a handle and secret, exact handle match.
    #[instrument(skip(self))]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<Member, RegistryError> {
        match self.perform(RegistryAction::Authenticate(credentials)).await? {
            RegistryActionResult::Authenticate(member) => Ok(member),
            other => Err(mismatched("Authenticate", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_book(&self, params: BookCreate) -> Result<(), RegistryError> {
        match self.perform(RegistryAction::AddBook(params)).await? {
            RegistryActionResult::AddBook(()) => Ok(()),
            other => Err(mismatched("AddBook", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_film(&self, params: FilmCreate) -> Result<(), RegistryError> {
        match self.perform(RegistryAction::AddFilm(params)).await? {
            RegistryActionResult::AddFilm(()) => Ok(()),
            other => Err(mismatched("AddFilm", other)),
        }
    }

    /// Rendered descriptions of every item whose title matches `name`.
    ///
    /// The actor renders the matches before answering, so the result is a
    /// consistent view even if the registry changes right after.
    #[instrument(skip(self))]
    pub async fn search(&self, name: &str) -> Result<Vec<String>, RegistryError> {
        match self.perform(RegistryAction::Search(ItemQuery::titled(name))).await? {
            RegistryActionResult::Search(matches) => Ok(matches),
            other => Err(mismatched("Search", other)),
        }
    }

    /// Review a book; returns its new average rating.
    #[instrument(skip(self))]
    pub async fn review_book(&self, params: ReviewCreate) -> Result<f32, RegistryError> {
        match self.perform(RegistryAction::ReviewBook(params)).await? {
            RegistryActionResult::ReviewBook(average) => Ok(average),
            other => Err(mismatched("ReviewBook", other)),
        }
    }

    /// Review a film; returns its new average rating.
    #[instrument(skip(self))]
    pub async fn review_film(&self, params: ReviewCreate) -> Result<f32, RegistryError> {
        match self.perform(RegistryAction::ReviewFilm(params)).await? {
            RegistryActionResult::ReviewFilm(average) => Ok(average),
            other => Err(mismatched("ReviewFilm", other)),
        }
    }

    pub async fn summary(&self) -> Result<RegistrySummary, RegistryError> {
        match self.perform(RegistryAction::Summary).await? {
            RegistryActionResult::Summary(summary) => Ok(summary),
            other => Err(mismatched("Summary", other)),
        }
    }
}
