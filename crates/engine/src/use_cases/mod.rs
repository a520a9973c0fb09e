//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across ports to fulfill user stories.

pub mod directory;
pub mod navigation;

// Re-export main types
pub use directory::DirectoryUseCases;
pub use navigation::NavigationUseCases;
