use envsettings::{Node, PathError, Settings};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,7}"
}

fn arb_scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        any::<bool>().prop_map(Node::from),
        any::<i64>().prop_map(Node::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Node::from),
    ]
}

/// Arbitrary finite trees of mappings, sequences and scalars.
fn arb_node() -> impl Strategy<Value = Node> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Sequence),
            prop::collection::btree_map(arb_key(), inner, 0..6).prop_map(Node::Mapping),
        ]
    })
}

fn arb_settings() -> impl Strategy<Value = Settings> {
    prop::collection::btree_map(arb_key(), arb_node(), 1..6).prop_map(|root| Settings::new("prop", root))
}

/// Every path from `node` to a leaf, with the leaf it reaches.
fn leaf_paths(node: &Node, prefix: &str, out: &mut Vec<(String, Node)>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        }
    };
    match node {
        Node::Mapping(map) => {
            for (k, child) in map {
                leaf_paths(child, &join(k.as_str()), out);
            }
        }
        Node::Sequence(items) => {
            for (i, child) in items.iter().enumerate() {
                leaf_paths(child, &join(i.to_string().as_str()), out);
            }
        }
        Node::Scalar(_) => out.push((prefix.to_string(), node.clone())),
    }
}

proptest! {
    /// Property: every leaf path resolves to exactly the leaf it names
    #[test]
    fn prop_leaf_paths_round_trip(settings in arb_settings()) {
        let mut paths = Vec::new();
        leaf_paths(&Node::Mapping(settings.root().clone()), "", &mut paths);

        for (path, leaf) in paths {
            prop_assert_eq!(settings.deep_get(&path).unwrap(), Some(&leaf));
        }
    }

    /// Property: once a mapping key is missing, any continuation is None
    #[test]
    fn prop_missing_key_returns_default(
        settings in arb_settings(),
        tail in prop::collection::vec("[a-z0-9]{1,4}", 0..4),
    ) {
        let mut segments = vec!["__absent__".to_string()];
        segments.extend(tail);
        let path = segments.join(".");

        prop_assert_eq!(settings.deep_get(&path).unwrap(), None);
        let fallback = Node::from("fallback");
        prop_assert_eq!(settings.deep_get_or(&path, &fallback).unwrap(), &fallback);
    }

    /// Property: any segment applied to a scalar is a shape error
    #[test]
    fn prop_scalar_traversal_fails(leaf in arb_scalar(), segment in "[a-z0-9]{1,6}") {
        let mut root = BTreeMap::new();
        root.insert("leaf".to_string(), leaf);
        let settings = Settings::new("prop", root);

        let result = settings.deep_get(&format!("leaf.{segment}"));
        let is_scalar_traversal = matches!(result, Err(PathError::ScalarTraversal { .. }));
        prop_assert!(is_scalar_traversal);
    }

    /// Property: sequence indices succeed exactly inside 0..len
    #[test]
    fn prop_sequence_index_validation(
        items in prop::collection::vec(arb_scalar(), 0..8),
        index in -4i64..12,
    ) {
        let len = items.len();
        let mut root = BTreeMap::new();
        root.insert("items".to_string(), Node::Sequence(items.clone()));
        let settings = Settings::new("prop", root);

        let result = settings.deep_get(&format!("items.{index}"));
        match usize::try_from(index).ok().filter(|&i| i < len) {
            Some(i) => {
                prop_assert_eq!(result.unwrap(), Some(&items[i]));
            }
            None => {
                let is_out_of_range = matches!(result, Err(PathError::IndexOutOfRange { .. }));
                prop_assert!(is_out_of_range);
            }
        }
    }

    /// Property: non-integer segments against a sequence are shape errors
    #[test]
    fn prop_sequence_rejects_non_integer(
        items in prop::collection::vec(arb_scalar(), 0..4),
        segment in "[a-z_][a-z0-9_]{0,5}",
    ) {
        let mut root = BTreeMap::new();
        root.insert("items".to_string(), Node::Sequence(items));
        let settings = Settings::new("prop", root);

        let result = settings.deep_get(&format!("items.{segment}"));
        let is_non_integer = matches!(result, Err(PathError::NonIntegerIndex { .. }));
        prop_assert!(is_non_integer);
    }
}
