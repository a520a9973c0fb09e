//! Engine settings sourced from the environment.

use waypost_domain::AccountId;

/// Runtime settings for the directory engine.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the SQLite database file.
    pub database_path: String,
    /// Account allowed to edit and delete any record, not just its own.
    pub admin_account_id: Option<AccountId>,
}

impl Settings {
    pub fn new(database_path: impl Into<String>, admin_account_id: Option<AccountId>) -> Self {
        Self {
            database_path: database_path.into(),
            admin_account_id,
        }
    }

    /// Read settings from `WAYPOST_DB` and `WAYPOST_ADMIN_ID`.
    ///
    /// A malformed admin id is dropped with a warning rather than taking the
    /// engine down; the directory still works, only without an admin override.
    pub fn from_env() -> Self {
        let database_path = std::env::var("WAYPOST_DB").unwrap_or_else(|_| "waypost.db".into());

        let admin_account_id = match std::env::var("WAYPOST_ADMIN_ID") {
            Ok(raw) => match AccountId::new(raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring WAYPOST_ADMIN_ID");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            database_path,
            admin_account_id,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new("waypost.db", None)
    }
}
