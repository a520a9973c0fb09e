//! SQLite-backed location record storage.

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use waypost_domain::{
    AccountId, Author, AuthorName, Coordinates, Description, Location, LocationId, LocationName,
};

use crate::infrastructure::ports::{FieldValue, LocationRecords, QueryField, RepoError};

const SELECT_COLUMNS: &str =
    "id, name, author_display_name, author_account_id, x, y, z, description";

/// SQLite implementation of the location records port.
///
/// Listings order by `rowid`, SQLite's implicit monotonic row key, which
/// gives insertion order without a dedicated sequence column. Exact matches
/// use `=` (BINARY collation, case-sensitive); substring matches use `LIKE`,
/// which SQLite folds case for ASCII characters only.
pub struct SqliteLocationRecords {
    pool: SqlitePool,
}

impl SqliteLocationRecords {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("locations", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS locations (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                author_display_name TEXT NOT NULL,
                author_account_id TEXT NOT NULL,
                x INTEGER NOT NULL,
                y INTEGER NOT NULL,
                z INTEGER NOT NULL,
                description TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("locations", e))?;

        Ok(Self { pool })
    }

    /// Rehydrate a domain record from a row.
    ///
    /// Stored values passed validation on the way in, so a failure here means
    /// the table was tampered with out of band and surfaces as corruption.
    fn row_to_location(row: &SqliteRow) -> Result<Location, RepoError> {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let display_name: String = row.get("author_display_name");
        let account_id: String = row.get("author_account_id");
        let x: i64 = row.get("x");
        let y: i64 = row.get("y");
        let z: i64 = row.get("z");
        let description: String = row.get("description");

        let id = LocationId::parse(&id).map_err(RepoError::serialization)?;
        let name = LocationName::new(name).map_err(RepoError::serialization)?;
        let author = Author::new(
            AuthorName::new(display_name).map_err(RepoError::serialization)?,
            AccountId::new(account_id).map_err(RepoError::serialization)?,
        );
        let description = Description::new(description).map_err(RepoError::serialization)?;

        Ok(Location::from_storage(
            id,
            name,
            author,
            Coordinates::new(x, y).with_z(z),
            description,
        ))
    }
}

/// Escape LIKE wildcards in a user-supplied fragment so it matches literally.
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl LocationRecords for SqliteLocationRecords {
    async fn insert(&self, location: &Location) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO locations (id, name, author_display_name, author_account_id, x, y, z, description)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(location.id.to_string())
        .bind(location.name.as_str())
        .bind(location.author.display_name.as_str())
        .bind(location.author.account_id.as_str())
        .bind(location.coords.x)
        .bind(location.coords.y)
        .bind(location.coords.z)
        .bind(location.description.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("insert", e))?;

        Ok(())
    }

    async fn select_by_exact(
        &self,
        field: QueryField,
        value: &str,
    ) -> Result<Vec<Location>, RepoError> {
        let sql = format!(
            "SELECT {} FROM locations WHERE {} = ? ORDER BY rowid",
            SELECT_COLUMNS,
            field.column()
        );
        let rows = sqlx::query(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("select_by_exact", e))?;

        rows.iter().map(Self::row_to_location).collect()
    }

    async fn select_by_substring(
        &self,
        field: QueryField,
        value: &str,
    ) -> Result<Vec<Location>, RepoError> {
        let sql = format!(
            r"SELECT {} FROM locations WHERE {} LIKE ? ESCAPE '\' ORDER BY rowid",
            SELECT_COLUMNS,
            field.column()
        );
        let rows = sqlx::query(&sql)
            .bind(format!("%{}%", escape_like(value)))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("select_by_substring", e))?;

        rows.iter().map(Self::row_to_location).collect()
    }

    async fn select_all(&self) -> Result<Vec<Location>, RepoError> {
        let sql = format!("SELECT {} FROM locations ORDER BY rowid", SELECT_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("select_all", e))?;

        rows.iter().map(Self::row_to_location).collect()
    }

    async fn update_field(
        &self,
        id: LocationId,
        column: &'static str,
        value: FieldValue,
    ) -> Result<u64, RepoError> {
        let sql = format!("UPDATE locations SET {} = ? WHERE id = ?", column);
        let query = match value {
            FieldValue::Text(text) => sqlx::query(&sql).bind(text),
            FieldValue::Integer(n) => sqlx::query(&sql).bind(n),
        };
        let result = query
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("update_field", e))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: LocationId) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_by_id", e))?;

        Ok(result.rows_affected())
    }
}
