//! Reviewable catalog entries.
//!
//! An [`Item`] carries the fields every variant shares (title, genre, reviews) and
//! an [`ItemKind`] with the variant payload. Code that needs variant-specific
//! behavior matches on the kind.

use super::member::{Credentials, MemberId};
use super::review::Review;
use super::text::fold;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant an item is, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemVariant {
    Book,
    Film,
}

impl fmt::Display for ItemVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("book"),
            Self::Film => f.write_str("film"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookDetails {
    pub author: String,
    pub page_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilmDetails {
    pub director: String,
    pub writer: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Book(BookDetails),
    Film(FilmDetails),
}

impl ItemKind {
    pub fn variant(&self) -> ItemVariant {
        match self {
            Self::Book(_) => ItemVariant::Book,
            Self::Film(_) => ItemVariant::Film,
        }
    }
}

/// A reviewable item holding at most one review per member, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    title: String,
    genre: String,
    reviews: Vec<Review>,
    kind: ItemKind,
}

impl Item {
    /// Creates an item without reviews. The title is kept as given.
    pub fn new(title: impl Into<String>, genre: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            reviews: Vec::new(),
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn variant(&self) -> ItemVariant {
        self.kind.variant()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn review_by(&self, author: MemberId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.author() == author)
    }

    /// True when this item's title matches `key`, a value produced by [`fold`].
    pub(crate) fn has_title_key(&self, key: &str) -> bool {
        fold(&self.title) == key
    }

    /// Mean of all ratings, or `None` while the item has no review.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: f32 = self.reviews.iter().map(Review::rating).sum();
        Some(sum / self.reviews.len() as f32)
    }

    /// Insert the author's review, or overwrite it if one exists.
    ///
    /// Returns the average rating after the change.
    pub(crate) fn upsert_review(
        &mut self,
        author: MemberId,
        rating: f32,
        comment: impl Into<String>,
    ) -> f32 {
        match self.reviews.iter_mut().find(|r| r.author() == author) {
            Some(existing) => existing.revise(rating, comment),
            None => self.reviews.push(Review::new(author, rating, comment)),
        }
        let sum: f32 = self.reviews.iter().map(Review::rating).sum();
        sum / self.reviews.len() as f32
    }
}

/// Payload for adding a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookCreate {
    pub credentials: Credentials,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub page_count: i64,
}

impl BookCreate {
    pub fn new(
        credentials: Credentials,
        title: impl Into<String>,
        genre: impl Into<String>,
        author: impl Into<String>,
        page_count: i64,
    ) -> Self {
        Self {
            credentials,
            title: Some(title.into()),
            genre: Some(genre.into()),
            author: Some(author.into()),
            page_count,
        }
    }
}

/// Payload for adding a film.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilmCreate {
    pub credentials: Credentials,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub duration_minutes: i64,
}

impl FilmCreate {
    pub fn new(
        credentials: Credentials,
        title: impl Into<String>,
        genre: impl Into<String>,
        director: impl Into<String>,
        writer: impl Into<String>,
        duration_minutes: i64,
    ) -> Self {
        Self {
            credentials,
            title: Some(title.into()),
            genre: Some(genre.into()),
            director: Some(director.into()),
            writer: Some(writer.into()),
            duration_minutes,
        }
    }
}

/// Title lookup across every variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemQuery {
    pub name: Option<String>,
}

impl ItemQuery {
    pub fn titled(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
