//! Edit location use case.
//!
//! Overwrites a single field on an existing record, gated by ownership.

use std::sync::Arc;
use tokio::sync::Mutex;
use waypost_domain::{
    AccountId, Coordinates, Description, DomainError, LocationId, LocationName,
};

use crate::infrastructure::ports::{FieldValue, LocationRecords, RepoError};

use super::{fetch_by_id, may_modify};

/// One editable field with its replacement value, already validated.
///
/// Closed set: the name, the three coordinate axes, and the description.
/// The id and the author are immutable after creation and have no variant
/// here on purpose.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationField {
    Name(LocationName),
    X(i64),
    Y(i64),
    Z(i64),
    Description(Description),
}

impl LocationField {
    /// Field tokens accepted from the front end, for error messages.
    pub const SUPPORTED: &'static str = "name, x, y, z, desc";

    /// Parse a field token and its raw replacement value.
    ///
    /// Coordinate values must parse as integers; name and description go
    /// through the same validation as at creation. Both `desc` and the long
    /// form `description` are accepted.
    pub fn parse(field: &str, value: &str) -> Result<Self, EditLocationError> {
        match field.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name(LocationName::new(value.to_string())?)),
            "x" => Ok(Self::X(Coordinates::parse_axis("x", value)?)),
            "y" => Ok(Self::Y(Coordinates::parse_axis("y", value)?)),
            "z" => Ok(Self::Z(Coordinates::parse_axis("z", value)?)),
            "desc" | "description" => {
                Ok(Self::Description(Description::new(value.to_string())?))
            }
            _ => Err(EditLocationError::UnknownField {
                field: field.to_string(),
                supported: Self::SUPPORTED,
            }),
        }
    }

    /// Column this field maps to in the records table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::X(_) => "x",
            Self::Y(_) => "y",
            Self::Z(_) => "z",
            Self::Description(_) => "description",
        }
    }

    fn into_value(self) -> FieldValue {
        match self {
            Self::Name(name) => FieldValue::Text(name.into()),
            Self::X(n) | Self::Y(n) | Self::Z(n) => FieldValue::Integer(n),
            Self::Description(desc) => FieldValue::Text(desc.into()),
        }
    }
}

/// Edit location use case.
pub struct EditLocation {
    records: Arc<dyn LocationRecords>,
    admin: Option<AccountId>,
    mutation_lock: Arc<Mutex<()>>,
}

impl EditLocation {
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

    /// Execute the edit use case.
    ///
    /// # Arguments
    /// * `id` - Record to edit, obtained from a prior lookup
    /// * `field` - Field token, one of [`LocationField::SUPPORTED`]
    /// * `value` - Raw replacement value
    /// * `requester` - Identity the ownership check runs against
    pub async fn execute(
        &self,
        id: LocationId,
        field: &str,
        value: &str,
        requester: &AccountId,
    ) -> Result<(), EditLocationError> {
        // 1. Validate field and value before taking the write lock
        let field = LocationField::parse(field, value)?;

        // 2. Ownership check and write form one atomic unit under the lock
        let _guard = self.mutation_lock.lock().await;

        let record = fetch_by_id(self.records.as_ref(), id)
            .await?
            .ok_or(EditLocationError::NotFound { id })?;

        if !may_modify(&record, requester, self.admin.as_ref()) {
            tracing::warn!(
                location_id = %id,
                requester = %requester,
                "Rejected edit by non-author"
            );
            return Err(EditLocationError::Unauthorized { id });
        }

        // 3. Overwrite the single named column
        let column = field.column();
        let affected = self.records.update_field(id, column, field.into_value()).await?;
        if affected == 0 {
            return Err(EditLocationError::NotFound { id });
        }

        tracing::debug!(location_id = %id, field = column, "Location field updated");

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditLocationError {
    #[error("Location not found: {id}")]
    NotFound { id: LocationId },
    #[error("Unknown field '{field}', editable fields are: {supported}")]
    UnknownField {
        field: String,
        supported: &'static str,
    },
    #[error("Not authorized to modify location: {id}")]
    Unauthorized { id: LocationId },
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
