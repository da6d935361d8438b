use crate::model::text::fold;
use crate::model::{Item, Member};
use crate::render::ItemView;

/// Lazy sequence of rendered descriptions for every item with a matching title.
///
/// Items are visited in insertion order and rendered only when reached. The
/// iterator borrows the registry, so it reflects the state at the time of the
/// search. Clone it to walk the same results again.
#[derive(Clone)]
pub struct Search<'a> {
    items: std::slice::Iter<'a, Item>,
    members: &'a [Member],
    key: String,
}

impl<'a> Search<'a> {
    pub(crate) fn new(items: &'a [Item], members: &'a [Member], name: &str) -> Self {
        Self {
            items: items.iter(),
            members,
            key: fold(name),
        }
    }
}

impl Iterator for Search<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let key = &self.key;
        let item = self.items.find(|item| item.has_title_key(key))?;
        Some(ItemView::new(item, self.members).to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}
