//! Parsed settings document: environment name to settings tree.

use std::collections::BTreeMap;

use super::node::Node;

/// The full content of a settings file, keyed by environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    source: String,
    environments: BTreeMap<String, Node>,
}

impl ConfigDocument {
    /// Build a document from already-parsed environment trees.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use envsettings::{ConfigDocument, Node};
    ///
    /// let mut environments = BTreeMap::new();
    /// environments.insert("dev".to_string(), Node::Mapping(BTreeMap::new()));
    /// let doc = ConfigDocument::new("inline", environments);
    ///
    /// assert_eq!(doc.len(), 1);
    /// assert_eq!(doc.environment("dev").map(Node::kind), Some("mapping"));
    /// assert!(doc.environment("prod").is_none());
    /// ```
    pub fn new(source: impl Into<String>, environments: BTreeMap<String, Node>) -> Self {
        Self {
            source: source.into(),
            environments,
        }
    }

    /// Where the document was read from (a file path or a caller label).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The tree stored under `name`, of whatever kind.
    pub fn environment(&self, name: &str) -> Option<&Node> {
        self.environments.get(name)
    }

    /// Environment names, sorted.
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    /// Number of environments.
    pub fn len(&self) -> usize {
        self.environments.len()
    }

    /// True when the file declared no environments.
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}
