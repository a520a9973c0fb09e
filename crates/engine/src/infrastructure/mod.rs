//! Infrastructure implementations.
//!
//! Contains port trait implementations for storage backends.

pub mod memory;
pub mod ports;
pub mod settings;
pub mod sqlite;
