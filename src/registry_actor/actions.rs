//! Operations the registry actor accepts.
//!
//! Each [`RegistryAction`] maps to one [`Registry`](crate::registry::Registry)
//! method and the [`RegistryActionResult`] variant of the same name carries its
//! answer. Results are owned so they can leave the actor task.

use crate::model::{
    BookCreate, Credentials, FilmCreate, ItemQuery, Member, MemberCreate, ReviewCreate,
};
use crate::registry::RegistrySummary;

#[derive(Debug, Clone)]
pub enum RegistryAction {
    Register(MemberCreate),
    Authenticate(Credentials),
    AddBook(BookCreate),
    AddFilm(FilmCreate),
    /// Matches are rendered inside the actor and collected before answering.
    Search(ItemQuery),
    ReviewBook(ReviewCreate),
    ReviewFilm(ReviewCreate),
    Summary,
}

/// Results from RegistryActions - variants match 1:1 with RegistryAction
#[derive(Debug, Clone)]
pub enum RegistryActionResult {
    Register(Member),
    Authenticate(Member),
    AddBook(()),
    AddFilm(()),
    Search(Vec<String>),
    ReviewBook(f32),
    ReviewFilm(f32),
    Summary(RegistrySummary),
}
