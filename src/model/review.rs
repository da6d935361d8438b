use super::member::{Credentials, MemberId};
use serde::{Deserialize, Serialize};

/// One member's opinion on one item.
///
/// The author is referenced by id; the member itself lives in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    author: MemberId,
    rating: f32,
    comment: String,
}

impl Review {
    pub(crate) fn new(author: MemberId, rating: f32, comment: impl Into<String>) -> Self {
        Self {
            author,
            rating,
            comment: comment.into(),
        }
    }

    pub fn author(&self) -> MemberId {
        self.author
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Overwrite rating and comment in place.
    pub(crate) fn revise(&mut self, rating: f32, comment: impl Into<String>) {
        self.rating = rating;
        self.comment = comment.into();
    }
}

/// Payload for submitting (or replacing) a review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewCreate {
    pub credentials: Credentials,
    pub title: Option<String>,
    pub rating: f32,
    pub comment: Option<String>,
}

impl ReviewCreate {
    pub fn new(
        credentials: Credentials,
        title: impl Into<String>,
        rating: f32,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            title: Some(title.into()),
            rating,
            comment: Some(comment.into()),
        }
    }
}
