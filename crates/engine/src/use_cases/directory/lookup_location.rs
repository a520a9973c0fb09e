//! Point lookup use case.
//!
//! Resolves a single record by exact name or author match, keeping the
//! zero / one / many cases distinguishable.

use std::sync::Arc;
use waypost_domain::Location;

use crate::infrastructure::ports::{LocationRecords, QueryField, RepoError};

/// Query modes supported by point lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Exact match against the location name.
    Name,
    /// Exact match against the author display name.
    Author,
}

impl LookupMode {
    /// Mode tokens accepted from the front end, for error messages.
    pub const SUPPORTED: &'static str = "name, author";

    /// Parse a mode token (case-insensitive).
    pub fn parse(mode: &str) -> Option<Self> {
        match mode.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "author" => Some(Self::Author),
            _ => None,
        }
    }

    fn query_field(self) -> QueryField {
        match self {
            Self::Name => QueryField::Name,
            Self::Author => QueryField::AuthorName,
        }
    }
}

/// Outcome of a point lookup.
///
/// Zero, one, and many matches are three distinct answers. The store never
/// silently hands back the first of several records sharing a name.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// No record matched.
    Empty,
    /// Exactly one record matched.
    One(Location),
    /// More than one record matched; all of them, in insertion order.
    Ambiguous(Vec<Location>),
}

/// Point lookup use case.
pub struct LookupLocation {
    records: Arc<dyn LocationRecords>,
}

impl LookupLocation {
    pub fn new(records: Arc<dyn LocationRecords>) -> Self {
        Self { records }
    }

    /// Execute the lookup use case.
    ///
    /// # Arguments
    /// * `token` - Exact text to match
    /// * `mode` - Mode token, one of [`LookupMode::SUPPORTED`]
    pub async fn execute(
        &self,
        token: &str,
        mode: &str,
    ) -> Result<LookupOutcome, LookupLocationError> {
        // 1. Resolve the query mode
        let mode = LookupMode::parse(mode).ok_or_else(|| LookupLocationError::InvalidMode {
            mode: mode.to_string(),
            supported: LookupMode::SUPPORTED,
        })?;

        // 2. Exact match on the chosen field
        let mut matches = self
            .records
            .select_by_exact(mode.query_field(), token)
            .await?;

        // 3. Distinguish zero, one, and many
        Ok(match matches.len() {
            0 => LookupOutcome::Empty,
            1 => LookupOutcome::One(matches.remove(0)),
            _ => LookupOutcome::Ambiguous(matches),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupLocationError {
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

    use super::{LookupLocation, LookupMode, LookupOutcome};

    fn build_use_case(records: MockLocationRecords) -> LookupLocation {
        LookupLocation::new(Arc::new(records))
    }

    #[tokio::test]
    async fn empty_store_yields_empty_not_ambiguous() {
        let mut records = MockLocationRecords::new();
        records
            .expect_select_by_exact()
            .returning(|_, _| Ok(vec![]));

        let outcome = build_use_case(records)
            .execute("Home Base", "name")
            .await
            .unwrap();
        assert_eq!(outcome, LookupOutcome::Empty);
    }

    #[tokio::test]
    async fn single_match_is_returned() {
        let home = location_at("Home Base", &author("steve", "1001"), 70, -120);
        let home_for_get = home.clone();

        let mut records = MockLocationRecords::new();
        records
            .expect_select_by_exact()
            .withf(|field, value| *field == QueryField::Name && value == "Home Base")
            .times(1)
            .returning(move |_, _| Ok(vec![home_for_get.clone()]));

        let outcome = build_use_case(records)
            .execute("Home Base", "name")
            .await
            .unwrap();
        assert_eq!(outcome, LookupOutcome::One(home));
    }

    #[tokio::test]
    async fn shared_name_is_ambiguous_with_all_matches() {
        let steve = author("steve", "1001");
        let alex = author("alex", "1002");
        let first = location_at("Portal", &steve, 0, 0);
        let second = location_at("Portal", &alex, 999, 999);
        let matches = vec![first.clone(), second.clone()];

        let mut records = MockLocationRecords::new();
        records
            .expect_select_by_exact()
            .returning(move |_, _| Ok(matches.clone()));

        let outcome = build_use_case(records)
            .execute("Portal", "name")
            .await
            .unwrap();
        assert_eq!(outcome, LookupOutcome::Ambiguous(vec![first, second]));
    }

    #[tokio::test]
    async fn author_mode_queries_the_display_name_field() {
        let mut records = MockLocationRecords::new();
        records
            .expect_select_by_exact()
            .withf(|field, value| *field == QueryField::AuthorName && value == "alex")
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let outcome = build_use_case(records).execute("alex", "author").await.unwrap();
        assert_eq!(outcome, LookupOutcome::Empty);
    }

    #[tokio::test]
    async fn unknown_mode_is_rejected_with_supported_list() {
        // No select expectation: an invalid mode must not reach storage.
        let err = build_use_case(MockLocationRecords::new())
            .execute("Home Base", "vibes")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            super::LookupLocationError::InvalidMode { .. }
        ));
        let msg = err.to_string();
        assert!(msg.contains("vibes"));
        assert!(msg.contains("name, author"));
    }

    #[test]
    fn mode_tokens_parse_case_insensitively() {
        assert_eq!(LookupMode::parse("Name"), Some(LookupMode::Name));
        assert_eq!(LookupMode::parse(" AUTHOR "), Some(LookupMode::Author));
        assert_eq!(LookupMode::parse("all"), None);
    }
}
