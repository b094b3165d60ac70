//! Settings file loading infrastructure
//!
//! Environment-sectioned TOML files:
//! - File reading and parsing
//! - Environment selection
//! - Conversion into the domain settings tree

pub mod loader;

pub use loader::ConfigLoader;
