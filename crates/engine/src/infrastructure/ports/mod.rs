//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete
//! types. Ports exist for:
//! - Record storage (could swap SQLite -> Postgres)
//! - Testing (mockall generates mocks from the traits)

mod error;
mod records;

// =============================================================================
// Storage Ports
// =============================================================================
pub use records::{FieldValue, LocationRecords, QueryField};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use records::MockLocationRecords;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
