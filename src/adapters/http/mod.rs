//! HTTP adapters.
//!
//! Exposes loaded settings to axum applications, both as an injectable
//! handler parameter and as a small read-only settings API.

pub mod settings_http;

pub use settings_http::{SettingsComponent, SettingsHttpConfig, SettingsHttpServer};
