//! Common test utilities for integration tests
//!
//! Provides the shared settings fixture and temp-file helpers.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Path to the `prod`/`dev` settings fixture.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/settings.toml")
}

/// Write `content` to a temporary settings file.
///
/// The file is removed when the returned handle is dropped.
#[allow(dead_code)]
pub fn temp_settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp settings");
    file.flush().expect("Failed to flush temp settings");
    file
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
