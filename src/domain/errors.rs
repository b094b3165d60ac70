//! Domain errors for settings loading and path resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Format the available environments as `a, b, c` (or `<none>`).
fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "<none>".to_string()
    } else {
        available.join(", ")
    }
}

/// A dotted path does not match the shape of the settings tree.
///
/// Raised when a segment cannot legally be applied to the node it reaches:
/// a non-integer or out-of-range segment against a sequence, or any segment
/// against a scalar. A missing mapping key is *not* a `PathError`; lookups
/// report that as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A sequence was indexed with a segment that is not an integer.
    #[error("cannot index a sequence with non-integer segment '{segment}' in path '{path}' (length {len})")]
    NonIntegerIndex {
        /// Full dotted path.
        path: String,
        /// Segment that failed.
        segment: String,
        /// Length of the sequence.
        len: usize,
    },

    /// An integer segment is negative or not below the sequence length.
    #[error("index '{segment}' out of range in path '{path}' (length {len})")]
    IndexOutOfRange {
        /// Full dotted path.
        path: String,
        /// Segment that failed.
        segment: String,
        /// Length of the sequence.
        len: usize,
    },

    /// A segment was applied to a scalar.
    #[error("cannot traverse into {kind} value with segment '{segment}' in path '{path}'")]
    ScalarTraversal {
        /// Full dotted path.
        path: String,
        /// Segment that failed.
        segment: String,
        /// Kind of the value reached.
        kind: &'static str,
    },
}

impl PathError {
    /// The full dotted path that failed to resolve.
    pub fn path(&self) -> &str {
        match self {
            Self::NonIntegerIndex { path, .. }
            | Self::IndexOutOfRange { path, .. }
            | Self::ScalarTraversal { path, .. } => path,
        }
    }

    /// The segment at which resolution failed.
    pub fn segment(&self) -> &str {
        match self {
            Self::NonIntegerIndex { segment, .. }
            | Self::IndexOutOfRange { segment, .. }
            | Self::ScalarTraversal { segment, .. } => segment,
        }
    }
}

/// Errors raised while loading settings or extracting typed values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        /// File that was being loaded.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML.
    #[error("Failed to parse settings file {}: {source}", .path.display())]
    Parse {
        /// File that was being loaded.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// No top-level section has the requested name.
    #[error("Environment '{environment}' not found (available: {})", format_available(.available))]
    EnvironmentNotFound {
        /// Requested environment.
        environment: String,
        /// Environments the file does declare, sorted.
        available: Vec<String>,
    },

    /// The requested section exists but is not a table.
    #[error("Environment '{environment}' is a {kind}, expected a table")]
    NotATable {
        /// Requested environment.
        environment: String,
        /// Kind of the section's value.
        kind: &'static str,
    },

    /// A dotted path does not fit the tree.
    #[error(transparent)]
    Path(#[from] PathError),

    /// A value could not be converted to the requested type.
    #[error("Failed to deserialize settings value: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
