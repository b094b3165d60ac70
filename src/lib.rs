//! envsettings - environment-sectioned settings
//!
//! Loads a TOML settings file whose top-level tables are environments,
//! selects one environment, and resolves dotted paths into it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): settings tree, path resolution, errors
//! - **Infrastructure Layer** (`infrastructure`): file loading and logging
//! - **Adapters Layer** (`adapters`): axum injection and HTTP API
//!
//! # Example
//!
//! ```no_run
//! use envsettings::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_path("settings.toml", "dev")?;
//!     let secret = settings.deep_get("sessions.secret")?;
//!     println!("{secret:?}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::http::{SettingsComponent, SettingsHttpConfig, SettingsHttpServer};
pub use domain::errors::{PathError, SettingsError, SettingsResult};
pub use domain::models::{ConfigDocument, Node, PathSegments, Scalar, Settings};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};
