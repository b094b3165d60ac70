//! Infrastructure layer module
//!
//! This module contains the adapters to the outside world:
//! - Settings file loading (TOML)
//! - Logging infrastructure

pub mod config;
pub mod logging;
