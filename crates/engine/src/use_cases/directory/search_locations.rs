//! Directory search use case.
//!
//! Multi-hit queries over the record set. Unlike point lookup, any number of
//! results is a normal answer here.

use std::sync::Arc;
use waypost_domain::Location;

use crate::infrastructure::ports::{LocationRecords, QueryField, RepoError};

/// Query modes supported by search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// ASCII-case-insensitive substring match against the location name.
    Name,
    /// Exact match against the author display name.
    Author,
    /// Every record; the search token is ignored.
    All,
}

impl SearchMode {
    /// Mode tokens accepted from the front end, for error messages.
    pub const SUPPORTED: &'static str = "name, author, all";

    /// Parse a mode token (case-insensitive).
    pub fn parse(mode: &str) -> Option<Self> {
        match mode.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "author" => Some(Self::Author),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Directory search use case.
///
/// Results come back in insertion order; no implicit sort.
pub struct SearchLocations {
    records: Arc<dyn LocationRecords>,
}

impl SearchLocations {
    pub fn new(records: Arc<dyn LocationRecords>) -> Self {
        Self { records }
    }

    /// Execute the search use case.
    ///
    /// # Arguments
    /// * `token` - Search text; ignored in `all` mode
    /// * `mode` - Mode token, one of [`SearchMode::SUPPORTED`]
    pub async fn execute(
        &self,
        token: &str,
        mode: &str,
    ) -> Result<Vec<Location>, SearchLocationsError> {
        let mode = SearchMode::parse(mode).ok_or_else(|| SearchLocationsError::InvalidMode {
            mode: mode.to_string(),
            supported: SearchMode::SUPPORTED,
        })?;

        let hits = match mode {
            SearchMode::Name => {
                self.records
                    .select_by_substring(QueryField::Name, token)
                    .await?
            }
            // Author matching stays exact even in search mode.
            SearchMode::Author => {
                self.records
                    .select_by_exact(QueryField::AuthorName, token)
                    .await?
            }
            SearchMode::All => self.records.select_all().await?,
        };

        Ok(hits)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchLocationsError {
    #[error("Unsupported query mode '{mode}', supported modes are: {supported}")]
    InvalidMode {
        mode: String,
        supported: &'static str,
    },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::infrastructure::ports::{MockLocationRecords, QueryField};
    use crate::test_fixtures::{author, location_at};

    use super::{SearchLocations, SearchMode};

    fn build_use_case(records: MockLocationRecords) -> SearchLocations {
        SearchLocations::new(Arc::new(records))
    }

    #[tokio::test]
    async fn name_mode_searches_substrings() {
        let steve = author("steve", "1001");
        let hits = vec![
            location_at("Nether Portal", &steve, 8, 8),
            location_at("End Portal", &steve, 1200, 300),
        ];
        let hits_for_get = hits.clone();

        let mut records = MockLocationRecords::new();
        records
            .expect_select_by_substring()
            .withf(|field, value| *field == QueryField::Name && value == "Portal")
            .times(1)
            .returning(move |_, _| Ok(hits_for_get.clone()));

        let found = build_use_case(records).execute("Portal", "name").await.unwrap();
        assert_eq!(found, hits);
    }

    #[tokio::test]
    async fn author_mode_matches_exactly() {
        let mut records = MockLocationRecords::new();
        records
            .expect_select_by_exact()
            .withf(|field, value| *field == QueryField::AuthorName && value == "steve")
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let found = build_use_case(records).execute("steve", "author").await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn all_mode_ignores_the_token() {
        let everything = vec![location_at("Spawn", &author("steve", "1001"), 0, 0)];
        let everything_for_get = everything.clone();

        let mut records = MockLocationRecords::new();
        records
            .expect_select_all()
            .times(1)
            .returning(move || Ok(everything_for_get.clone()));

        let found = build_use_case(records)
            .execute("completely ignored", "all")
            .await
            .unwrap();
        assert_eq!(found, everything);
    }

    #[tokio::test]
    async fn zero_hits_is_a_normal_answer() {
        let mut records = MockLocationRecords::new();
        records
            .expect_select_by_substring()
            .returning(|_, _| Ok(vec![]));

        let found = build_use_case(records)
            .execute("no such place", "name")
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn unknown_mode_is_rejected_with_supported_list() {
        let err = build_use_case(MockLocationRecords::new())
            .execute("token", "nearest")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            super::SearchLocationsError::InvalidMode { .. }
        ));
        assert!(err.to_string().contains("name, author, all"));
    }

    #[test]
    fn mode_tokens_parse_case_insensitively() {
        assert_eq!(SearchMode::parse("ALL"), Some(SearchMode::All));
        assert_eq!(SearchMode::parse("Author"), Some(SearchMode::Author));
        assert_eq!(SearchMode::parse("fuzzy"), None);
    }
}
