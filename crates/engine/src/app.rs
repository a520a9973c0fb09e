// App struct holds dependencies - some fields for future features
#![allow(dead_code)]

//! Application state and composition.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::{
    memory::InMemoryLocationRecords,
    ports::{LocationRecords, RepoError},
    settings::Settings,
    sqlite::SqliteLocationRecords,
};
use crate::use_cases;

/// Main application state.
///
/// Holds the records port and all use cases wired on top of it.
/// A front end (chat bot, CLI, HTTP layer) owns one `App` and calls
/// into `use_cases`; the raw port is exposed for migrations and admin
/// tooling that bypass the use-case rules on purpose.
pub struct App {
    pub records: Arc<dyn LocationRecords>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub directory: use_cases::DirectoryUseCases,
    pub navigation: use_cases::NavigationUseCases,
}

impl App {
    /// Open (or create) the SQLite database named in `settings` and wire
    /// everything up against it.
    pub async fn with_sqlite(settings: &Settings) -> Result<Self, RepoError> {
        let records: Arc<dyn LocationRecords> =
            Arc::new(SqliteLocationRecords::new(&settings.database_path).await?);
        Ok(Self::new(records, settings))
    }

    /// Wire everything up against an in-memory store. Nothing survives a
    /// restart; used in tests and throwaway sessions.
    pub fn with_memory(settings: &Settings) -> Self {
        let records: Arc<dyn LocationRecords> = Arc::new(InMemoryLocationRecords::new());
        Self::new(records, settings)
    }

    /// Create a new App with all dependencies wired up.
    pub fn new(records: Arc<dyn LocationRecords>, settings: &Settings) -> Self {
        // Edit and delete share one lock so their read-check-write
        // sequences cannot interleave.
        let mutation_lock = Arc::new(Mutex::new(()));
        let admin = settings.admin_account_id.clone();

        let directory = use_cases::DirectoryUseCases::new(
            Arc::new(use_cases::directory::CreateLocation::new(records.clone())),
            Arc::new(use_cases::directory::LookupLocation::new(records.clone())),
            Arc::new(use_cases::directory::SearchLocations::new(records.clone())),
            Arc::new(use_cases::directory::EditLocation::new(
                records.clone(),
                admin.clone(),
                mutation_lock.clone(),
            )),
            Arc::new(use_cases::directory::DeleteLocation::new(
                records.clone(),
                admin,
                mutation_lock,
            )),
        );

        let navigation = use_cases::NavigationUseCases::new(
            Arc::new(use_cases::navigation::MeasureDistance::new(records.clone())),
            Arc::new(use_cases::navigation::EstimateTravel::new()),
            Arc::new(use_cases::navigation::TakeBearing::new(records.clone())),
        );

        Self {
            records,
            use_cases: UseCases {
                directory,
                navigation,
            },
        }
    }
}
