use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry-assigned identifier of a [`Member`].
///
/// Reviews hold this id instead of the member itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub u32);

impl From<u32> for MemberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "member_{}", self.0)
    }
}

/// A registered, authenticatable identity.
///
/// Members are immutable once registered. Two members are equal when handle,
/// secret and profile are all equal; the id takes no part in equality.
#[derive(Clone)]
pub struct Member {
    id: MemberId,
    handle: String,
    secret: String,
    profile: String,
}

impl Member {
    pub(crate) fn new(
        id: MemberId,
        handle: impl Into<String>,
        secret: impl Into<String>,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            id,
            handle: handle.into(),
            secret: secret.into(),
            profile: profile.into(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Exact, opaque comparison of the stored secret with `candidate`.
    pub fn secret_matches(&self, candidate: &str) -> bool {
        self.secret == candidate
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.secret == other.secret && self.profile == other.profile
    }
}

impl Eq for Member {}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("handle", &self.handle)
            .field("secret", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}

/// Handle and secret presented by the acting member.
///
/// Fields are optional so that a request missing either one can be represented
/// and rejected as invalid input.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub handle: Option<String>,
    pub secret: Option<String>,
}

impl Credentials {
    pub fn new(handle: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            handle: Some(handle.into()),
            secret: Some(secret.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("handle", &self.handle)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Payload for registering a new member.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberCreate {
    pub handle: Option<String>,
    pub secret: Option<String>,
    pub profile: Option<String>,
}

impl MemberCreate {
    pub fn new(
        handle: impl Into<String>,
        secret: impl Into<String>,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            handle: Some(handle.into()),
            secret: Some(secret.into()),
            profile: Some(profile.into()),
        }
    }
}

impl fmt::Debug for MemberCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberCreate")
            .field("handle", &self.handle)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("profile", &self.profile)
            .finish()
    }
}
