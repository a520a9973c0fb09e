//! Value objects - Immutable objects defined by their attributes

mod author;
mod coordinates;
mod names;

pub use author::Author;
pub use coordinates::Coordinates;
pub use names::{AccountId, AuthorName, Description, LocationName};
