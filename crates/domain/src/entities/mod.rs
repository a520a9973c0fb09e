//! Domain entities - Core business objects with identity

mod location;

pub use location::Location;
