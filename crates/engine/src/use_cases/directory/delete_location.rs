//! Delete location use case.
//!
//! Permanent removal of a record, gated by ownership. No soft delete and no
//! archival: a deleted id is never reused, UUIDs see to that.

use std::sync::Arc;
use tokio::sync::Mutex;
use waypost_domain::{AccountId, LocationId};

use crate::infrastructure::ports::{LocationRecords, RepoError};

use super::{fetch_by_id, may_modify};

/// Delete location use case.
pub struct DeleteLocation {
    records: Arc<dyn LocationRecords>,
    admin: Option<AccountId>,
    mutation_lock: Arc<Mutex<()>>,
}

impl DeleteLocation {
    pub fn new(
        records: Arc<dyn LocationRecords>,
        admin: Option<AccountId>,
        mutation_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            records,
            admin,
            mutation_lock,
        }
    }

    /// Execute the delete use case.
    ///
    /// # Arguments
    /// * `id` - Record to remove, obtained from a prior lookup
    /// * `requester` - Identity the ownership check runs against
    pub async fn execute(
        &self,
        id: LocationId,
        requester: &AccountId,
    ) -> Result<(), DeleteLocationError> {
        // Ownership check and delete form one atomic unit under the lock
        let _guard = self.mutation_lock.lock().await;

        let record = fetch_by_id(self.records.as_ref(), id)
            .await?
            .ok_or(DeleteLocationError::NotFound { id })?;

        if !may_modify(&record, requester, self.admin.as_ref()) {
            tracing::warn!(
                location_id = %id,
                requester = %requester,
                "Rejected delete by non-author"
            );
            return Err(DeleteLocationError::Unauthorized { id });
        }

        let affected = self.records.delete_by_id(id).await?;
        if affected == 0 {
            return Err(DeleteLocationError::NotFound { id });
        }

        tracing::debug!(location_id = %id, name = %record.name, "Location deleted");

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteLocationError {
    #[error("Location not found: {id}")]
    NotFound { id: LocationId },
    #[error("Not authorized to modify location: {id}")]
    Unauthorized { id: LocationId },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
