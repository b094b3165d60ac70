//! Dotted path parsing and resolution.
//!
//! A dotted path such as `oauth_providers.0.name` is split on `.` into
//! segments. Whether a segment is a mapping key or a sequence index is
//! decided by the node it is applied to, not by its own syntax.

use std::collections::BTreeMap;

use super::node::Node;
use crate::domain::errors::PathError;

/// Outcome of applying one segment to one node.
enum Step<'a> {
    Descend(&'a Node),
    Missing,
}

/// A dotted path split into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'p> {
    raw: &'p str,
    segments: Vec<&'p str>,
}

impl<'p> PathSegments<'p> {
    /// Split `path` on `.`.
    ///
    /// Returns `None` when the path cannot name anything: the empty path, or
    /// a path with an empty segment (`a..b`, `.a`, `a.`). Lookups treat such
    /// paths as a missing key.
    pub fn parse(path: &'p str) -> Option<Self> {
        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        Some(Self {
            raw: path,
            segments,
        })
    }

    /// The path as written.
    pub const fn as_str(&self) -> &'p str {
        self.raw
    }

    /// The non-empty segments, in order.
    pub fn segments(&self) -> &[&'p str] {
        &self.segments
    }

    /// Walk the path starting at `root`.
    ///
    /// `Ok(None)` means a mapping key along the way was absent.
    pub fn resolve<'a>(&self, root: &'a Node) -> Result<Option<&'a Node>, PathError> {
        self.walk(root, &self.segments)
    }

    /// Walk the path starting at a bare mapping, as held by
    /// [`Settings`](super::settings::Settings).
    pub fn resolve_in<'a>(
        &self,
        root: &'a BTreeMap<String, Node>,
    ) -> Result<Option<&'a Node>, PathError> {
        let Some((first, rest)) = self.segments.split_first() else {
            return Ok(None);
        };
        match root.get(*first) {
            Some(node) => self.walk(node, rest),
            None => Ok(None),
        }
    }

    fn walk<'a>(&self, start: &'a Node, segments: &[&str]) -> Result<Option<&'a Node>, PathError> {
        let mut current = start;
        for segment in segments {
            match self.step(current, segment)? {
                Step::Descend(next) => current = next,
                Step::Missing => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    fn step<'a>(&self, current: &'a Node, segment: &str) -> Result<Step<'a>, PathError> {
        match current {
            Node::Mapping(map) => Ok(map.get(segment).map_or(Step::Missing, Step::Descend)),
            Node::Sequence(items) => {
                let index = parse_index(segment).ok_or_else(|| PathError::NonIntegerIndex {
                    path: self.raw.to_string(),
                    segment: segment.to_string(),
                    len: items.len(),
                })?;
                index
                    .and_then(|i| items.get(i))
                    .map(Step::Descend)
                    .ok_or_else(|| PathError::IndexOutOfRange {
                        path: self.raw.to_string(),
                        segment: segment.to_string(),
                        len: items.len(),
                    })
            }
            Node::Scalar(scalar) => Err(PathError::ScalarTraversal {
                path: self.raw.to_string(),
                segment: segment.to_string(),
                kind: scalar.kind(),
            }),
        }
    }
}

/// Classify a segment as a sequence index.
///
/// `None` when the segment is not an integer (optional sign, then ASCII
/// digits). `Some(None)` when it is an integer that cannot address any
/// element: negative, or too large for `usize`.
fn parse_index(segment: &str) -> Option<Option<usize>> {
    let (negative, digits) = match segment.as_bytes().first() {
        Some(b'-') => (true, &segment[1..]),
        Some(b'+') => (false, &segment[1..]),
        _ => (false, segment),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Some(None);
    }
    Some(digits.parse::<usize>().ok())
}
