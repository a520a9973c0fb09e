pub mod entities;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::Location;

pub use error::DomainError;

// Re-export geometry functions and types
pub use geometry::{bearing, planar_distance, Bearing, CardinalDirection, TravelProfile};

// Re-export ID types
pub use ids::LocationId;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{AccountId, Author, AuthorName, Coordinates, Description, LocationName};
