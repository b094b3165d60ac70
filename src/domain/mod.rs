//! Domain layer for environment settings
//!
//! This module contains the settings tree model, dotted path resolution
//! and the error types they raise.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{PathError, SettingsError, SettingsResult};
