//! Shared builders for engine tests.
//!
//! Every test that needs a record on the board goes through these so the
//! incidental fields (z, description) stay out of the test bodies.

use waypost_domain::{
    AccountId, Author, AuthorName, Coordinates, Description, Location, LocationName,
};

/// Build an author from raw display name and account id.
pub fn author(name: &str, account_id: &str) -> Author {
    Author::new(
        AuthorName::new(name).unwrap(),
        AccountId::new(account_id).unwrap(),
    )
}

/// Build a location at ground level (z = 0) with no description.
pub fn location_at(name: &str, author: &Author, x: i64, y: i64) -> Location {
    Location::new(
        LocationName::new(name).unwrap(),
        author.clone(),
        Coordinates::new(x, y),
        Description::not_available(),
    )
}

/// Build a location with an explicit elevation.
pub fn location_with_z(name: &str, author: &Author, x: i64, y: i64, z: i64) -> Location {
    Location::new(
        LocationName::new(name).unwrap(),
        author.clone(),
        Coordinates::new(x, y).with_z(z),
        Description::not_available(),
    )
}
