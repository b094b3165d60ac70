//! Adapters to external frameworks.
//!
//! Only HTTP for now: axum injection plus the settings API server.

pub mod http;
