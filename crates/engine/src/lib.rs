//! Waypost Engine library.
//!
//! This crate contains all server-side code for the Waypost location directory.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration (directory, navigation)
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders for integration testing.
#[cfg(test)]
pub mod test_fixtures;


pub use app::App;
pub use infrastructure::settings::Settings;
