//! Settings tree node model.
//!
//! A parsed settings file is a tree of [`Node`]s:
//! - Mapping: string keys to child nodes
//! - Sequence: ordered, index-addressable child nodes
//! - Scalar: a leaf value (string, integer, float, boolean, datetime)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::path::PathSegments;
use crate::domain::errors::PathError;

/// A leaf value in the settings tree.
///
/// Deserializing from a self-describing format never yields `Datetime`:
/// text always lands in `String`. Datetimes only come from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// UTF-8 text.
    String(String),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// TOML datetime, kept as its RFC 3339 text.
    Datetime(String),
}

impl Scalar {
    /// Human-readable name of the scalar kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Datetime(_) => "datetime",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Datetime(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// One value in the settings tree.
///
/// Nodes have pure value semantics: two nodes are equal when their
/// structural content is equal, and cloning produces an independent copy.
///
/// `Deserialize` accepts any self-describing format (JSON, for instance).
/// Settings files are read through `From<toml::Value>` instead so that
/// TOML datetimes keep their own kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// String keys to child nodes.
    Mapping(BTreeMap<String, Node>),
    /// Ordered children, addressed by index.
    Sequence(Vec<Node>),
    /// A leaf.
    Scalar(Scalar),
}

impl Node {
    /// Human-readable name of the node kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::Scalar(scalar) => scalar.kind(),
        }
    }

    /// Resolve a dotted path starting at this node.
    ///
    /// See [`Settings::deep_get`](super::settings::Settings::deep_get) for the
    /// resolution rules.
    pub fn deep_get(&self, path: &str) -> Result<Option<&Self>, PathError> {
        match PathSegments::parse(path) {
            Some(segments) => segments.resolve(self),
            None => Ok(None),
        }
    }

    /// The child mapping, if this is a mapping.
    pub const fn as_mapping(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// The children, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The leaf, if this is a scalar.
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Text of a string or datetime leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s) | Scalar::Datetime(s)) => Some(s),
            _ => None,
        }
    }

    /// Value of an integer leaf.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Float view; integers widen to `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Float(x)) => Some(*x),
            Self::Scalar(Scalar::Integer(i)) => Some(*i as f64),
            _ => None,
        }
    }

    /// Value of a boolean leaf.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Convert to a JSON value, preserving booleans, numbers, strings and
    /// sequence order. Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Mapping(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Scalar(Scalar::String(s) | Scalar::Datetime(s)) => {
                serde_json::Value::String(s.clone())
            }
            Self::Scalar(Scalar::Integer(i)) => serde_json::Value::from(*i),
            Self::Scalar(Scalar::Float(x)) => serde_json::Value::from(*x),
            Self::Scalar(Scalar::Boolean(b)) => serde_json::Value::Bool(*b),
        }
    }
}

impl From<toml::Value> for Node {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::Scalar(Scalar::String(s)),
            toml::Value::Integer(i) => Self::Scalar(Scalar::Integer(i)),
            toml::Value::Float(x) => Self::Scalar(Scalar::Float(x)),
            toml::Value::Boolean(b) => Self::Scalar(Scalar::Boolean(b)),
            toml::Value::Datetime(dt) => Self::Scalar(Scalar::Datetime(dt.to_string())),
            toml::Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => Self::Mapping(
                table
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Integer(i))
    }
}

impl From<f64> for Node {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Boolean(b))
    }
}
