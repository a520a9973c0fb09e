//! Storage port for the shared location directory.

use async_trait::async_trait;
use waypost_domain::{Location, LocationId};

use super::error::RepoError;

// =============================================================================
// Query Vocabulary
// =============================================================================

/// Fields a caller may match records against.
///
/// Queries name a field from this closed set; free-form column strings never
/// cross the port for reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    Id,
    Name,
    AuthorName,
}

impl QueryField {
    /// Column this field maps to in the records table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::AuthorName => "author_display_name",
        }
    }
}

/// A typed value bound into an update statement.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

// =============================================================================
// Record Storage
// =============================================================================

/// Row-level access to persisted location records.
///
/// Matching semantics are part of the contract and must hold for every
/// adapter: exact matches compare case-sensitively, substring matches ignore
/// ASCII case only (non-ASCII characters compare exactly, as SQLite's `LIKE`
/// does), and listings come back in insertion order. Adapters bind all values
/// as parameters; the only strings spliced into statements are column names
/// produced by [`QueryField::column`] or the use cases' own field tables.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRecords: Send + Sync {
    /// Persist a new record.
    async fn insert(&self, location: &Location) -> Result<(), RepoError>;

    /// Records whose `field` equals `value` exactly.
    async fn select_by_exact(
        &self,
        field: QueryField,
        value: &str,
    ) -> Result<Vec<Location>, RepoError>;

    /// Records whose `field` contains `value`, ignoring ASCII case.
    async fn select_by_substring(
        &self,
        field: QueryField,
        value: &str,
    ) -> Result<Vec<Location>, RepoError>;

    /// Every record, in insertion order.
    async fn select_all(&self) -> Result<Vec<Location>, RepoError>;

    /// Set a single column on the record with `id`.
    ///
    /// Returns the number of rows affected: 0 means no such record.
    async fn update_field(
        &self,
        id: LocationId,
        column: &'static str,
        value: FieldValue,
    ) -> Result<u64, RepoError>;

    /// Remove the record with `id`.
    ///
    /// Returns the number of rows affected: 0 means no such record.
    async fn delete_by_id(&self, id: LocationId) -> Result<u64, RepoError>;
}
