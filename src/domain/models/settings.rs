//! Settings for one selected environment.

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use super::node::Node;
use super::path::PathSegments;
use crate::domain::errors::{PathError, SettingsResult};
use crate::infrastructure::config::ConfigLoader;

/// The settings tree of a single environment.
///
/// Cloning is cheap: the tree is shared behind an `Arc` and never mutated,
/// so a `Settings` can be handed to any number of request handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    environment: String,
    root: Arc<BTreeMap<String, Node>>,
}

impl Settings {
    /// Wrap an already-built root mapping as the settings for `environment`.
    pub fn new(environment: impl Into<String>, root: BTreeMap<String, Node>) -> Self {
        Self {
            environment: environment.into(),
            root: Arc::new(root),
        }
    }

    /// Load `path` and select the `environment` section.
    pub fn from_path(path: impl AsRef<Path>, environment: &str) -> SettingsResult<Self> {
        let document = ConfigLoader::load(path)?;
        ConfigLoader::select_environment(&document, environment)
    }

    /// Name of the environment these settings were selected from.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// The whole environment tree.
    pub fn root(&self) -> &BTreeMap<String, Node> {
        &self.root
    }

    /// Top-level value for `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    /// Top-level keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// True when the environment section has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Look up a value by dotted path.
    ///
    /// Each segment is applied to the node reached so far:
    /// - mapping: the segment is a key; an absent key ends the lookup with
    ///   `Ok(None)` without examining later segments
    /// - sequence: the segment must be an integer in `0..len`, otherwise
    ///   [`PathError::NonIntegerIndex`] or [`PathError::IndexOutOfRange`]
    /// - scalar: nothing can be traversed, [`PathError::ScalarTraversal`]
    ///
    /// An empty path or a path containing an empty segment yields `Ok(None)`.
    ///
    /// ```
    /// use envsettings::{ConfigLoader, Node};
    ///
    /// let doc = ConfigLoader::parse_str(
    ///     "[dev]\nports = [80, 443]\n",
    ///     "inline",
    /// ).unwrap();
    /// let settings = ConfigLoader::select_environment(&doc, "dev").unwrap();
    ///
    /// assert_eq!(settings.deep_get("ports.1").unwrap(), Some(&Node::from(443_i64)));
    /// assert_eq!(settings.deep_get("missing.key").unwrap(), None);
    /// assert!(settings.deep_get("ports.9").is_err());
    /// ```
    pub fn deep_get(&self, path: &str) -> Result<Option<&Node>, PathError> {
        match PathSegments::parse(path) {
            Some(segments) => segments.resolve_in(&self.root),
            None => Ok(None),
        }
    }

    /// Like [`deep_get`](Self::deep_get), falling back to `default` when the
    /// path names nothing.
    pub fn deep_get_or<'a>(&'a self, path: &str, default: &'a Node) -> Result<&'a Node, PathError> {
        Ok(self.deep_get(path)?.unwrap_or(default))
    }

    /// Look up a value by dotted path and deserialize it into `T`.
    pub fn deep_get_as<T: DeserializeOwned>(&self, path: &str) -> SettingsResult<Option<T>> {
        self.deep_get(path)?
            .map(|node| serde_json::from_value(node.to_json()))
            .transpose()
            .map_err(Into::into)
    }

    /// The whole tree as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.root
                .iter()
                .map(|(key, node)| (key.clone(), node.to_json()))
                .collect(),
        )
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
