//! Location entity - Named points shared through the world directory
//!
//! The sole persistent entity. One record per registered point: a display
//! name, the registering author, a coordinate triple, and free-text notes.

use serde::{Deserialize, Serialize};

use crate::ids::LocationId;
use crate::value_objects::{Author, Coordinates, Description, LocationName};

/// A named point in the shared world directory.
///
/// `id` is assigned once at creation and never reused; it is the only key
/// accepted for edit/delete. `author` is fixed at creation. All other fields
/// are editable by the author (or the configured override identity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: LocationName,
    pub author: Author,
    pub coords: Coordinates,
    pub description: Description,
}

impl Location {
    /// Create a fresh record with a newly assigned id.
    pub fn new(
        name: LocationName,
        author: Author,
        coords: Coordinates,
        description: Description,
    ) -> Self {
        Self {
            id: LocationId::new(),
            name,
            author,
            coords,
            description,
        }
    }

    /// Reconstruct a record from storage, keeping its persisted id.
    pub fn from_storage(
        id: LocationId,
        name: LocationName,
        author: Author,
        coords: Coordinates,
        description: Description,
    ) -> Self {
        Self {
            id,
            name,
            author,
            coords,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{AccountId, AuthorName};

    fn author() -> Author {
        Author::new(
            AuthorName::new("steve").unwrap(),
            AccountId::new("100").unwrap(),
        )
    }

    #[test]
    fn new_assigns_a_fresh_id() {
        let name = LocationName::new("Spawn").unwrap();
        let a = Location::new(
            name.clone(),
            author(),
            Coordinates::new(0, 0),
            Description::default(),
        );
        let b = Location::new(name, author(), Coordinates::new(0, 0), Description::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn from_storage_keeps_the_persisted_id() {
        let id = LocationId::new();
        let loc = Location::from_storage(
            id,
            LocationName::new("Stronghold").unwrap(),
            author(),
            Coordinates::new(-120, 451).with_z(30),
            Description::new("bring ender pearls").unwrap(),
        );
        assert_eq!(loc.id, id);
        assert_eq!(loc.coords.z, 30);
    }
}
