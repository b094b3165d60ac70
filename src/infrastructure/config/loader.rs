//! Reads settings files and selects environment sections.

use std::path::Path;
use tracing::{debug, info};

use crate::domain::errors::{SettingsError, SettingsResult};
use crate::domain::models::{ConfigDocument, Node, Settings};

/// Loads environment-sectioned TOML settings files.
///
/// A settings file has one top-level table per environment:
///
/// ```toml
/// [prod]
/// conn_pool_size = 32
///
/// [dev]
/// conn_pool_size = 4
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and parse the settings file at `path`.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<ConfigDocument> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading settings file");

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::into_document(table, path.display().to_string());
        info!(
            path = %path.display(),
            environments = ?document.environments().collect::<Vec<_>>(),
            "settings file loaded"
        );
        Ok(document)
    }

    /// Parse settings from an in-memory string. `source` labels the document
    /// in errors and logs.
    pub fn parse_str(content: &str, source: &str) -> SettingsResult<ConfigDocument> {
        let table: toml::Table = toml::from_str(content).map_err(|source_err| SettingsError::Parse {
            path: source.into(),
            source: source_err,
        })?;
        Ok(Self::into_document(table, source.to_string()))
    }

    /// Select the settings for `environment` from a loaded document.
    pub fn select_environment(
        document: &ConfigDocument,
        environment: &str,
    ) -> SettingsResult<Settings> {
        let node = document
            .environment(environment)
            .ok_or_else(|| SettingsError::EnvironmentNotFound {
                environment: environment.to_string(),
                available: document.environments().map(str::to_string).collect(),
            })?;

        match node {
            Node::Mapping(root) => {
                info!(
                    source = document.source(),
                    environment,
                    keys = root.len(),
                    "settings environment selected"
                );
                Ok(Settings::new(environment, root.clone()))
            }
            other => Err(SettingsError::NotATable {
                environment: environment.to_string(),
                kind: other.kind(),
            }),
        }
    }

    fn into_document(table: toml::Table, source: String) -> ConfigDocument {
        let environments = table
            .into_iter()
            .map(|(name, value)| (name, Node::from(value)))
            .collect();
        ConfigDocument::new(source, environments)
    }
}
