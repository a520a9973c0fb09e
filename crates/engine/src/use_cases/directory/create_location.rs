//! Create location use case.
//!
//! Validates raw command arguments, assigns a fresh id, and appends one
//! record to the directory.

use std::sync::Arc;
use waypost_domain::{Author, Coordinates, Description, DomainError, Location, LocationName};

use crate::infrastructure::ports::{LocationRecords, RepoError};

/// Create location use case.
///
/// Validation fails closed: nothing is written unless every argument checks
/// out. Duplicate names are allowed at this layer; lookups report them as an
/// ambiguous outcome instead.
pub struct CreateLocation {
    records: Arc<dyn LocationRecords>,
}

impl CreateLocation {
    pub fn new(records: Arc<dyn LocationRecords>) -> Self {
        Self { records }
    }

    /// Execute the create location use case.
    ///
    /// # Arguments
    /// * `name` - Display name for the new location
    /// * `author` - Requester identity, recorded as the immutable author
    /// * `x`, `y`, `z` - Coordinate text as handed over by the front end;
    ///   `z` defaults to 0 when absent
    /// * `description` - Optional free text, defaults to the "N/A" sentinel
    ///
    /// # Returns
    /// The stored record, including its assigned id.
    pub async fn execute(
        &self,
        name: &str,
        author: Author,
        x: Option<&str>,
        y: Option<&str>,
        z: Option<&str>,
        description: Option<&str>,
    ) -> Result<Location, CreateLocationError> {
        // 1. Validate every argument before touching storage
        let name = LocationName::new(name.to_string())?;
        let coords = Coordinates::parse(x, y, z)?;
        let description = match description {
            Some(text) => Description::new(text.to_string())?,
            None => Description::not_available(),
        };

        // 2. Assign an id and persist
        let location = Location::new(name, author, coords, description);
        self.records.insert(&location).await?;

        tracing::debug!(
            location_id = %location.id,
            name = %location.name,
            coords = %location.coords,
            "Location created"
        );

        Ok(location)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateLocationError {
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
