//! Error types for registry operations.

use crate::model::ItemVariant;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Every way a registry operation can be rejected.
///
/// Within one operation the checks run in a fixed order: input validation, then
/// authentication, then uniqueness or existence. The first failing check decides
/// the variant returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// A required argument is missing, malformed or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown handle, or known handle with the wrong secret.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// A member with the same handle (ignoring case and surrounding blanks) exists.
    #[error("Member already exists: {0}")]
    DuplicateMember(String),

    /// A book with the same title (ignoring case and surrounding blanks) exists.
    #[error("Book already exists: {0}")]
    DuplicateBook(String),

    /// A film with the same title (ignoring case and surrounding blanks) exists.
    #[error("Film already exists: {0}")]
    DuplicateFilm(String),

    /// No item of the requested variant carries this title.
    #[error("No {kind} titled {title:?}")]
    ItemNotFound { kind: ItemVariant, title: String },

    /// The registry actor could not be reached.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RegistryError {
    fn from(e: FrameworkError) -> Self {
        RegistryError::ActorCommunicationError(e.to_string())
    }
}

impl RegistryError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RegistryError::InvalidInput(msg.into())
    }
}
