//! In-memory location record storage for development and testing
//!
//! Vec-backed, so listings fall out in insertion order for free. Nothing is
//! persisted; suitable for tests and throwaway worlds only.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use waypost_domain::{
    AccountId, Author, AuthorName, Coordinates, Description, Location, LocationId, LocationName,
};

use crate::infrastructure::ports::{FieldValue, LocationRecords, QueryField, RepoError};

/// One row of the locations table, kept as flat storage values.
///
/// Storing column values rather than domain types keeps this adapter at the
/// same level as the SQLite one: updates address columns, and rehydration
/// re-runs domain validation on the way out.
#[derive(Debug, Clone)]
struct StoredRow {
    id: String,
    name: String,
    author_display_name: String,
    author_account_id: String,
    x: i64,
    y: i64,
    z: i64,
    description: String,
}

impl StoredRow {
    fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.to_string(),
            name: location.name.to_string(),
            author_display_name: location.author.display_name.to_string(),
            author_account_id: location.author.account_id.to_string(),
            x: location.coords.x,
            y: location.coords.y,
            z: location.coords.z,
            description: location.description.to_string(),
        }
    }

    fn to_location(&self) -> Result<Location, RepoError> {
        let id = LocationId::parse(&self.id).map_err(RepoError::serialization)?;
        let name = LocationName::new(self.name.clone()).map_err(RepoError::serialization)?;
        let author = Author::new(
            AuthorName::new(self.author_display_name.clone()).map_err(RepoError::serialization)?,
            AccountId::new(self.author_account_id.clone()).map_err(RepoError::serialization)?,
        );
        let description =
            Description::new(self.description.clone()).map_err(RepoError::serialization)?;

        Ok(Location::from_storage(
            id,
            name,
            author,
            Coordinates::new(self.x, self.y).with_z(self.z),
            description,
        ))
    }

    fn column_text(&self, field: QueryField) -> &str {
        match field {
            QueryField::Id => &self.id,
            QueryField::Name => &self.name,
            QueryField::AuthorName => &self.author_display_name,
        }
    }
}

/// In-memory implementation of the location records port.
#[derive(Default)]
pub struct InMemoryLocationRecords {
    rows: Arc<RwLock<Vec<StoredRow>>>,
}

impl InMemoryLocationRecords {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationRecords for InMemoryLocationRecords {
    async fn insert(&self, location: &Location) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        rows.push(StoredRow::from_location(location));
        Ok(())
    }

    async fn select_by_exact(
        &self,
        field: QueryField,
        value: &str,
    ) -> Result<Vec<Location>, RepoError> {
        let rows = self.rows.read().await;
        rows.iter()
            .filter(|row| row.column_text(field) == value)
            .map(StoredRow::to_location)
            .collect()
    }

    async fn select_by_substring(
        &self,
        field: QueryField,
        value: &str,
    ) -> Result<Vec<Location>, RepoError> {
        // ASCII folding only, matching SQLite's LIKE.
        let needle = value.to_ascii_lowercase();
        let rows = self.rows.read().await;
        rows.iter()
            .filter(|row| {
                row.column_text(field)
                    .to_ascii_lowercase()
                    .contains(&needle)
            })
            .map(StoredRow::to_location)
            .collect()
    }

    async fn select_all(&self) -> Result<Vec<Location>, RepoError> {
        let rows = self.rows.read().await;
        rows.iter().map(StoredRow::to_location).collect()
    }

    async fn update_field(
        &self,
        id: LocationId,
        column: &'static str,
        value: FieldValue,
    ) -> Result<u64, RepoError> {
        let mut rows = self.rows.write().await;
        let id = id.to_string();
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            return Ok(0);
        };

        match (column, value) {
            ("name", FieldValue::Text(text)) => row.name = text,
            ("description", FieldValue::Text(text)) => row.description = text,
            ("x", FieldValue::Integer(n)) => row.x = n,
            ("y", FieldValue::Integer(n)) => row.y = n,
            ("z", FieldValue::Integer(n)) => row.z = n,
            (column, value) => {
                return Err(RepoError::database(
                    "update_field",
                    format!("cannot bind {:?} to column {}", value, column),
                ))
            }
        }

        Ok(1)
    }

    async fn delete_by_id(&self, id: LocationId) -> Result<u64, RepoError> {
        let mut rows = self.rows.write().await;
        let id = id.to_string();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok((before - rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{author, location_at};

    #[tokio::test]
    async fn select_all_preserves_insertion_order() {
        let records = InMemoryLocationRecords::new();
        let steve = author("steve", "1001");
        records
            .insert(&location_at("Home Base", &steve, 0, 0))
            .await
            .unwrap();
        records
            .insert(&location_at("Stronghold", &steve, 100, -40))
            .await
            .unwrap();
        records
            .insert(&location_at("Witch Hut", &steve, -320, 77))
            .await
            .unwrap();

        let all = records.select_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|l| l.name.as_str().to_string()).collect();
        assert_eq!(names, vec!["Home Base", "Stronghold", "Witch Hut"]);
    }

    #[tokio::test]
    async fn exact_match_is_case_sensitive() {
        let records = InMemoryLocationRecords::new();
        records
            .insert(&location_at("Home Base", &author("steve", "1001"), 0, 0))
            .await
            .unwrap();

        let hit = records
            .select_by_exact(QueryField::Name, "Home Base")
            .await
            .unwrap();
        assert_eq!(hit.len(), 1);

        let miss = records
            .select_by_exact(QueryField::Name, "home base")
            .await
            .unwrap();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn substring_match_ignores_ascii_case() {
        let records = InMemoryLocationRecords::new();
        records
            .insert(&location_at("Nether Portal", &author("alex", "1002"), 8, 8))
            .await
            .unwrap();

        let hits = records
            .select_by_substring(QueryField::Name, "PORT")
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_str(), "Nether Portal");
    }

    #[tokio::test]
    async fn substring_match_is_case_sensitive_beyond_ascii() {
        let records = InMemoryLocationRecords::new();
        records
            .insert(&location_at("Ärger Keep", &author("alex", "1002"), 8, 8))
            .await
            .unwrap();

        let folded = records
            .select_by_substring(QueryField::Name, "ärger")
            .await
            .unwrap();
        assert!(folded.is_empty());

        let exact = records
            .select_by_substring(QueryField::Name, "Ärger")
            .await
            .unwrap();
        assert_eq!(exact.len(), 1);

        let ascii_tail = records
            .select_by_substring(QueryField::Name, "rger")
            .await
            .unwrap();
        assert_eq!(ascii_tail.len(), 1);
    }

    #[tokio::test]
    async fn author_queries_match_the_display_name_column() {
        let records = InMemoryLocationRecords::new();
        records
            .insert(&location_at("Iron Farm", &author("alex", "1002"), 12, 90))
            .await
            .unwrap();

        let by_author = records
            .select_by_exact(QueryField::AuthorName, "alex")
            .await
            .unwrap();
        assert_eq!(by_author.len(), 1);

        let wrong_author = records
            .select_by_exact(QueryField::AuthorName, "steve")
            .await
            .unwrap();
        assert!(wrong_author.is_empty());
    }

    #[tokio::test]
    async fn update_field_rewrites_the_named_column() {
        let records = InMemoryLocationRecords::new();
        let loc = location_at("Old Name", &author("steve", "1001"), 5, 5);
        records.insert(&loc).await.unwrap();

        let affected = records
            .update_field(loc.id, "name", FieldValue::Text("New Name".into()))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let affected = records
            .update_field(loc.id, "x", FieldValue::Integer(-200))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let all = records.select_all().await.unwrap();
        assert_eq!(all[0].name.as_str(), "New Name");
        assert_eq!(all[0].coords.x, -200);
    }

    #[tokio::test]
    async fn update_field_returns_zero_for_missing_record() {
        let records = InMemoryLocationRecords::new();
        let affected = records
            .update_field(LocationId::new(), "name", FieldValue::Text("ghost".into()))
            .await
            .unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let records = InMemoryLocationRecords::new();
        let loc = location_at("Doomed", &author("steve", "1001"), 1, 1);
        records.insert(&loc).await.unwrap();

        assert_eq!(records.delete_by_id(loc.id).await.unwrap(), 1);
        assert_eq!(records.delete_by_id(loc.id).await.unwrap(), 0);
        assert!(records.select_all().await.unwrap().is_empty());
    }
}
