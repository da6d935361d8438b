//! Textual rendering of members, reviews, items and the whole registry.
//!
//! The layout reproduces the historical output of the service, French labels
//! included, so existing consumers can keep parsing it.

use crate::model::{Item, ItemKind, Member, MemberId, Review};
use crate::registry::Registry;
use std::fmt;

/// Ratings always carry a decimal part: `4.0`, `3.5`.
struct Rating(f32);

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.handle(), self.profile())
    }
}

fn handle_of(members: &[Member], id: MemberId) -> &str {
    members
        .iter()
        .find(|m| m.id() == id)
        .map_or("?", Member::handle)
}

/// A review together with the handle of its author.
pub struct ReviewView<'a> {
    review: &'a Review,
    author: &'a str,
}

impl<'a> ReviewView<'a> {
    pub fn new(review: &'a Review, members: &'a [Member]) -> Self {
        Self {
            review,
            author: handle_of(members, review.author()),
        }
    }
}

impl fmt::Display for ReviewView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avis de {} : \nNote : {}/5 \nCommentaire : {}",
            self.author,
            Rating(self.review.rating()),
            self.review.comment()
        )
    }
}

/// An item rendered with its reviews, which needs the members to name authors.
pub struct ItemView<'a> {
    item: &'a Item,
    members: &'a [Member],
}

impl<'a> ItemView<'a> {
    pub fn new(item: &'a Item, members: &'a [Member]) -> Self {
        Self { item, members }
    }
}

impl fmt::Display for ItemView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.item;
        writeln!(f, "\nTitre : {}", item.title())?;
        writeln!(f, "Genre : {}", item.genre())?;
        match item.kind() {
            ItemKind::Book(book) => {
                writeln!(f, "Auteur : {}", book.author)?;
                writeln!(f, "Nombre de pages : {}", book.page_count)?;
            }
            ItemKind::Film(film) => {
                writeln!(f, "Réalisateur : {}", film.director)?;
                writeln!(f, "Scénariste : {}", film.writer)?;
                writeln!(f, "Durée : {}", film.duration_minutes)?;
            }
        }
        // no reviews yet renders as NaN, like the historical output
        let average = item.average_rating().unwrap_or(f32::NAN);
        writeln!(f, "Note moyenne : {}/5 ", Rating(average))?;
        f.write_str("Avis : \n")?;
        for review in item.reviews() {
            writeln!(f, "{}", ReviewView::new(review, self.members))?;
        }
        Ok(())
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Le SocialNetwork est composé des éléments suivants:\n")?;

        writeln!(f, "\nMEMBRES ({}) : ", self.member_count())?;
        if self.members().is_empty() {
            f.write_str("Aucun membre.\n")?;
        }
        for member in self.members() {
            writeln!(f, "{member}")?;
        }

        if self.items().is_empty() {
            return f.write_str("\n AUCUN ITEM.\n");
        }
        writeln!(f, "\nLIVRES ({}) : ", self.book_count())?;
        for book in self.books() {
            write!(f, "{}", self.describe(book))?;
        }
        writeln!(f, "\nFILMS ({}) : ", self.film_count())?;
        for film in self.films() {
            write!(f, "{}", self.describe(film))?;
        }
        Ok(())
    }
}
