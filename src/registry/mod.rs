//! # Registry
//!
//! The aggregate that owns every member and every item and enforces the rules no
//! single entity can enforce alone: unique handles, unique titles per variant,
//! authentication of the acting member, one review per member per item.
//!
//! ## Operation shape
//!
//! Every mutating operation runs the same pipeline and stops at the first failure:
//!
//! 1. **Validate** the payload (presence, lengths, ranges) → [`RegistryError::InvalidInput`]
//! 2. **Authenticate** the acting member → [`RegistryError::AuthenticationFailed`]
//! 3. **Check** uniqueness or existence → `Duplicate*` / [`RegistryError::ItemNotFound`]
//! 4. **Mutate**, in a single step
//!
//! Nothing is written before step 4, so a rejected call leaves the registry untouched.
//!
//! ## Normalization
//!
//! - Registration compares handles trimmed and case-folded, and stores them trimmed.
//! - Adding an item authenticates on trimmed handles, case sensitive.
//! - Reviewing (and [`Registry::authenticate`]) compares handles exactly.
//! - Titles are compared trimmed and case-folded, and stored as given.
//!
//! The registry is synchronous and single-threaded. Concurrent callers go through
//! [`crate::registry_actor`], which serializes every request.

pub mod error;
pub mod search;
pub mod validate;

pub use error::*;
pub use search::Search;

use crate::model::text::{fold, non_space_len, trim_blanks};
use crate::model::{
    BookCreate, BookDetails, FilmCreate, FilmDetails, Item, ItemKind, ItemQuery, ItemVariant,
    Member, MemberCreate, MemberId, ReviewCreate,
};
use crate::render::ItemView;
use serde::Serialize;
use tracing::{debug, info, warn};
use validate::{check_count, check_handle, check_rating, check_secret, check_title, required};

/// Member and item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub members: usize,
    pub books: usize,
    pub films: usize,
}

/// Owns all members and items, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    members: Vec<Member>,
    items: Vec<Item>,
    next_member_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn book_count(&self) -> usize {
        self.books().count()
    }

    pub fn film_count(&self) -> usize {
        self.films().count()
    }

    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            members: self.member_count(),
            books: self.book_count(),
            films: self.film_count(),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == id)
    }

    /// Every item, books and films interleaved in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn books(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items_of(ItemVariant::Book)
    }

    pub fn films(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items_of(ItemVariant::Film)
    }

    fn items_of(&self, variant: ItemVariant) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |i| i.variant() == variant)
    }

    /// The item of `variant` whose title matches `title`, ignoring case and surrounding blanks.
    pub fn find_item(&self, variant: ItemVariant, title: &str) -> Option<&Item> {
        let key = fold(title);
        self.items_of(variant).find(|i| i.has_title_key(&key))
    }

    /// Renderable view of `item` with its review authors resolved.
    pub fn describe<'a>(&'a self, item: &'a Item) -> ItemView<'a> {
        ItemView::new(item, &self.members)
    }

    /// Rendered descriptions of every item, of any variant, whose title matches
    /// `query.name` ignoring case and surrounding blanks.
    ///
    /// The sequence is produced lazily; an empty one is not an error.
    pub fn search(&self, query: &ItemQuery) -> Result<Search<'_>, RegistryError> {
        let name = required(&query.name, "name")?;
        if non_space_len(name) < 1 {
            return Err(RegistryError::invalid(
                "name must contain at least one character other than a space",
            ));
        }
        debug!(name, "Search");
        Ok(Search::new(&self.items, &self.members, name))
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Registers a new member and returns it.
    pub fn register(&mut self, params: MemberCreate) -> Result<&Member, RegistryError> {
        let (handle, secret, profile) = self
            .check_registration(params)
            .inspect_err(|e| warn!(error = %e, "Registration rejected"))?;

        self.next_member_id += 1;
        let id = MemberId(self.next_member_id);
        let index = self.members.len();
        self.members.push(Member::new(id, handle, secret, profile));
        info!(%id, handle = self.members[index].handle(), size = self.members.len(), "Member registered");
        Ok(&self.members[index])
    }

    /// Validates a registration and returns the trimmed handle, secret and profile.
    fn check_registration(
        &self,
        params: MemberCreate,
    ) -> Result<(String, String, String), RegistryError> {
        let (Some(handle), Some(secret), Some(profile)) =
            (params.handle, params.secret, params.profile)
        else {
            return Err(RegistryError::invalid(
                "handle, secret and profile are required",
            ));
        };
        check_handle(&handle)?;
        check_secret(&secret)?;

        let handle = trim_blanks(&handle).to_string();
        let key = fold(&handle);
        if self.members.iter().any(|m| fold(m.handle()) == key) {
            return Err(RegistryError::DuplicateMember(handle));
        }
        Ok((handle, secret, profile))
    }

    /// Finds the member whose handle is exactly `handle` and checks its secret.
    ///
    /// The first handle match decides: a wrong secret fails even if another
    /// member's secret would have matched.
    pub fn authenticate(&self, handle: &str, secret: &str) -> Result<&Member, RegistryError> {
        self.members
            .iter()
            .find(|m| m.handle() == handle)
            .filter(|m| m.secret_matches(secret))
            .ok_or(RegistryError::AuthenticationFailed)
    }

    /// Like [`Registry::authenticate`], but surrounding blanks of the handles are ignored.
    fn authenticate_trimmed(&self, handle: &str, secret: &str) -> Result<&Member, RegistryError> {
        let handle = trim_blanks(handle);
        self.members
            .iter()
            .find(|m| trim_blanks(m.handle()) == handle)
            .filter(|m| m.secret_matches(secret))
            .ok_or(RegistryError::AuthenticationFailed)
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Adds a book on behalf of an authenticated member.
    pub fn add_book(&mut self, params: BookCreate) -> Result<(), RegistryError> {
        let title = params.title.clone();
        let result = self.try_add_book(params);
        log_item_outcome(ItemVariant::Book, title.as_deref(), &result);
        result
    }

    fn try_add_book(&mut self, params: BookCreate) -> Result<(), RegistryError> {
        let handle = required(&params.credentials.handle, "handle")?;
        let secret = required(&params.credentials.secret, "secret")?;
        let title = required(&params.title, "title")?;
        let genre = required(&params.genre, "genre")?;
        let author = required(&params.author, "author")?;
        check_handle(handle)?;
        check_secret(secret)?;
        check_title(title)?;
        let page_count = check_count(params.page_count, "page count")?;

        let item = Item::new(
            title,
            genre,
            ItemKind::Book(BookDetails {
                author: author.to_string(),
                page_count,
            }),
        );
        self.insert_item(handle, secret, item)
    }

    /// Adds a film on behalf of an authenticated member.
    pub fn add_film(&mut self, params: FilmCreate) -> Result<(), RegistryError> {
        let title = params.title.clone();
        let result = self.try_add_film(params);
        log_item_outcome(ItemVariant::Film, title.as_deref(), &result);
        result
    }

    fn try_add_film(&mut self, params: FilmCreate) -> Result<(), RegistryError> {
        let handle = required(&params.credentials.handle, "handle")?;
        let secret = required(&params.credentials.secret, "secret")?;
        let title = required(&params.title, "title")?;
        let genre = required(&params.genre, "genre")?;
        let director = required(&params.director, "director")?;
        let writer = required(&params.writer, "writer")?;
        check_handle(handle)?;
        check_secret(secret)?;
        check_title(title)?;
        let duration_minutes = check_count(params.duration_minutes, "duration")?;

        let item = Item::new(
            title,
            genre,
            ItemKind::Film(FilmDetails {
                director: director.to_string(),
                writer: writer.to_string(),
                duration_minutes,
            }),
        );
        self.insert_item(handle, secret, item)
    }

    /// Authentication, then per-variant title uniqueness, then insertion.
    fn insert_item(&mut self, handle: &str, secret: &str, item: Item) -> Result<(), RegistryError> {
        self.authenticate_trimmed(handle, secret)?;

        let variant = item.variant();
        if self.find_item(variant, item.title()).is_some() {
            let title = item.title().to_string();
            return Err(match variant {
                ItemVariant::Book => RegistryError::DuplicateBook(title),
                ItemVariant::Film => RegistryError::DuplicateFilm(title),
            });
        }
        self.items.push(item);
        Ok(())
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Records the member's opinion on a book and returns the book's new average.
    pub fn review_book(&mut self, params: ReviewCreate) -> Result<f32, RegistryError> {
        self.review_item(ItemVariant::Book, params)
    }

    /// Records the member's opinion on a film and returns the film's new average.
    pub fn review_film(&mut self, params: ReviewCreate) -> Result<f32, RegistryError> {
        self.review_item(ItemVariant::Film, params)
    }

    fn review_item(
        &mut self,
        variant: ItemVariant,
        params: ReviewCreate,
    ) -> Result<f32, RegistryError> {
        let title = params.title.clone();
        let rating = params.rating;
        let result = self.try_review_item(variant, params);
        match &result {
            Ok(average) => info!(%variant, title = ?title, rating, average, "Review recorded"),
            Err(e) => warn!(%variant, title = ?title, error = %e, "Review rejected"),
        }
        result
    }

    fn try_review_item(
        &mut self,
        variant: ItemVariant,
        params: ReviewCreate,
    ) -> Result<f32, RegistryError> {
        let handle = required(&params.credentials.handle, "handle")?;
        let secret = required(&params.credentials.secret, "secret")?;
        let title = required(&params.title, "title")?;
        let comment = required(&params.comment, "comment")?;
        check_handle(handle)?;
        check_secret(secret)?;
        check_title(title)?;
        check_rating(params.rating)?;

        let author = self.authenticate(handle, secret)?.id();

        let key = fold(title);
        let item = self
            .items
            .iter_mut()
            .find(|i| i.variant() == variant && i.has_title_key(&key))
            .ok_or_else(|| RegistryError::ItemNotFound {
                kind: variant,
                title: title.to_string(),
            })?;

        Ok(item.upsert_review(author, params.rating, comment))
    }
}

fn log_item_outcome(variant: ItemVariant, title: Option<&str>, result: &Result<(), RegistryError>) {
    match result {
        Ok(()) => info!(%variant, title, "Item added"),
        Err(e) => warn!(%variant, title, error = %e, "Item rejected"),
    }
}
