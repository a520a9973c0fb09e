//! Location directory use cases.
//!
//! Record lifecycle for the shared directory: create, point lookup, search,
//! field edit, and delete. Mutations are ownership-gated; reads are open to
//! everyone on the server.

mod create_location;
mod delete_location;
mod edit_location;
mod lookup_location;
mod search_locations;

pub use create_location::{CreateLocation, CreateLocationError};
pub use delete_location::{DeleteLocation, DeleteLocationError};
pub use edit_location::{EditLocation, EditLocationError, LocationField};
pub use lookup_location::{LookupLocation, LookupLocationError, LookupMode, LookupOutcome};
pub use search_locations::{SearchLocations, SearchLocationsError, SearchMode};

use std::sync::Arc;
use waypost_domain::{AccountId, Location, LocationId};

use crate::infrastructure::ports::{LocationRecords, QueryField, RepoError};

/// Container for directory use cases.
pub struct DirectoryUseCases {
    pub create: Arc<CreateLocation>,
    pub lookup: Arc<LookupLocation>,
    pub search: Arc<SearchLocations>,
    pub edit: Arc<EditLocation>,
    pub delete: Arc<DeleteLocation>,
}

impl DirectoryUseCases {
    pub fn new(
        create: Arc<CreateLocation>,
        lookup: Arc<LookupLocation>,
        search: Arc<SearchLocations>,
        edit: Arc<EditLocation>,
        delete: Arc<DeleteLocation>,
    ) -> Self {
        Self {
            create,
            lookup,
            search,
            edit,
            delete,
        }
    }
}

/// Fetch a single record by id, if present.
///
/// This is shared logic between the edit and delete use cases, which address
/// records by id rather than name.
pub async fn fetch_by_id(
    records: &dyn LocationRecords,
    id: LocationId,
) -> Result<Option<Location>, RepoError> {
    let rows = records
        .select_by_exact(QueryField::Id, &id.to_string())
        .await?;
    Ok(rows.into_iter().next())
}

/// Whether `requester` may modify `record`.
///
/// The author always may; the configured admin account, if any, may modify
/// every record. Checks run against account ids, never display names.
pub fn may_modify(record: &Location, requester: &AccountId, admin: Option<&AccountId>) -> bool {
    record.author.is_account(requester) || admin == Some(requester)
}
