//! Domain types: members, items, reviews and the request payloads that create them.

pub mod item;
pub mod member;
pub mod review;
pub(crate) mod text;

pub use item::*;
pub use member::*;
pub use review::*;
