//! Recursive structural comparison of two canonical trees.
//!
//! Mappings compare by key, sequences by index. A change of node variant is
//! reported as a single `KindChanged` at that path rather than recursing
//! into incomparable shapes. Attribute sets and text slots of the XML
//! overlay compare under `@name` / `#text` paths.

use pf_model::{Attributed, Mapping, Node, Scalar};

use crate::delta::{Change, Delta, Path};

/// Compute the structural delta between two trees.
///
/// Identical trees produce an empty delta. The result classifies every
/// difference as added, removed, changed scalar, or changed node type.
pub fn diff_nodes(left: &Node, right: &Node) -> Delta {
    let mut changes = Vec::new();
    diff_at(&Path::root(), left, right, &mut changes);
    Delta { changes }
}

fn diff_at(path: &Path, left: &Node, right: &Node, changes: &mut Vec<Change>) {
    if left == right {
        return;
    }
    match (left, right) {
        (Node::Scalar(old), Node::Scalar(new)) => changes.push(Change::Changed {
            path: path.clone(),
            old: old.clone(),
            new: new.clone(),
        }),
        (Node::Sequence(old), Node::Sequence(new)) => diff_sequences(path, old, new, changes),
        (Node::Mapping(old), Node::Mapping(new)) => diff_mappings(path, old, new, changes),
        (Node::Attributed(old), Node::Attributed(new)) => {
            diff_attributed(path, old, new, changes)
        }
        (old, new) => changes.push(Change::KindChanged {
            path: path.clone(),
            old: old.clone(),
            new: new.clone(),
        }),
    }
}

fn diff_mappings(path: &Path, left: &Mapping, right: &Mapping, changes: &mut Vec<Change>) {
    // Removed and changed keys.
    for (key, left_value) in left.iter() {
        match right.get(key) {
            Some(right_value) => diff_at(&path.child(key), left_value, right_value, changes),
            None => changes.push(Change::Removed {
                path: path.child(key),
                value: left_value.clone(),
            }),
        }
    }

    // Added keys.
    for (key, right_value) in right.iter() {
        if !left.contains_key(key) {
            changes.push(Change::Added {
                path: path.child(key),
                value: right_value.clone(),
            });
        }
    }
}

fn diff_sequences(path: &Path, left: &[Node], right: &[Node], changes: &mut Vec<Change>) {
    let shared = left.len().min(right.len());
    for i in 0..shared {
        diff_at(&path.index(i), &left[i], &right[i], changes);
    }
    for (i, value) in left.iter().enumerate().skip(shared) {
        changes.push(Change::Removed {
            path: path.index(i),
            value: value.clone(),
        });
    }
    for (i, value) in right.iter().enumerate().skip(shared) {
        changes.push(Change::Added {
            path: path.index(i),
            value: value.clone(),
        });
    }
}

fn diff_attributed(path: &Path, left: &Attributed, right: &Attributed, changes: &mut Vec<Change>) {
    for (name, left_value) in &left.attributes {
        let attr_path = path.child(&format!("@{name}"));
        match right.attribute(name) {
            Some(right_value) if right_value != left_value => changes.push(Change::Changed {
                path: attr_path,
                old: left_value.clone(),
                new: right_value.clone(),
            }),
            Some(_) => {}
            None => changes.push(Change::Removed {
                path: attr_path,
                value: Node::Scalar(left_value.clone()),
            }),
        }
    }
    for (name, right_value) in &right.attributes {
        if left.attribute(name).is_none() {
            changes.push(Change::Added {
                path: path.child(&format!("@{name}")),
                value: Node::Scalar(right_value.clone()),
            });
        }
    }

    match (&left.text, &right.text) {
        (Some(old), Some(new)) if old != new => changes.push(Change::Changed {
            path: path.child("#text"),
            old: Scalar::String(old.clone()),
            new: Scalar::String(new.clone()),
        }),
        (Some(old), None) => changes.push(Change::Removed {
            path: path.child("#text"),
            value: Node::string(old),
        }),
        (None, Some(new)) => changes.push(Change::Added {
            path: path.child("#text"),
            value: Node::string(new),
        }),
        _ => {}
    }

    diff_mappings(path, &left.children, &right.children, changes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_model::Number;

    fn json(text: &str) -> Node {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn identical_trees_produce_empty_delta() {
        let node = json(r#"{"a": {"b": [1, 2]}, "c": null}"#);
        assert!(diff_nodes(&node, &node).is_empty());
    }

    #[test]
    fn single_scalar_change() {
        let delta = diff_nodes(&json(r#"{"a": 1}"#), &json(r#"{"a": 2}"#));
        assert_eq!(delta.len(), 1);
        match &delta.changes[0] {
            Change::Changed { path, old, new } => {
                assert_eq!(path.to_string(), "a");
                assert_eq!(*old, Scalar::Number(Number::Int(1)));
                assert_eq!(*new, Scalar::Number(Number::Int(2)));
            }
            other => panic!("expected Changed, got {:?}", other),
        }
    }

    #[test]
    fn added_and_removed_keys() {
        let delta = diff_nodes(
            &json(r#"{"keep": 1, "gone": 2}"#),
            &json(r#"{"keep": 1, "new": 3}"#),
        );
        assert_eq!(delta.len(), 2);
        assert_eq!(delta.removals(), 1);
        assert_eq!(delta.additions(), 1);
    }

    #[test]
    fn nested_changes_carry_full_paths() {
        let delta = diff_nodes(
            &json(r#"{"a": {"b": [1, 2]}}"#),
            &json(r#"{"a": {"b": [1, 5]}}"#),
        );
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.changes[0].path().to_string(), "a.b[1]");
    }

    #[test]
    fn sequence_growth_reports_added_indices() {
        let delta = diff_nodes(&json(r#"[1, 2]"#), &json(r#"[1, 2, 3, 4]"#));
        assert_eq!(delta.additions(), 2);
        assert_eq!(delta.changes[0].path().to_string(), "[2]");
    }

    #[test]
    fn node_type_change_is_a_single_entry() {
        let delta = diff_nodes(&json(r#"{"a": 1}"#), &json(r#"{"a": [1]}"#));
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.kind_changes(), 1);
        assert_eq!(delta.changes[0].path().to_string(), "a");
    }

    #[test]
    fn root_kind_change_uses_root_path() {
        let delta = diff_nodes(&json("1"), &json("[1]"));
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.changes[0].path().to_string(), "$");
    }

    #[test]
    fn numeric_equality_spans_variants() {
        // 1 and 1.0 are the same number; no change reported.
        let delta = diff_nodes(&json(r#"{"a": 1}"#), &json(r#"{"a": 1.0}"#));
        assert!(delta.is_empty());
    }

    #[test]
    fn attribute_changes_address_with_at_prefix() {
        let mut left = Attributed::new();
        left.attributes.push(("id".into(), Scalar::from("1")));
        left.text = Some("body".into());
        let mut right = Attributed::new();
        right.attributes.push(("id".into(), Scalar::from("2")));
        right.text = Some("body".into());

        let delta = diff_nodes(
            &Node::Attributed(left),
            &Node::Attributed(right),
        );
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.changes[0].path().to_string(), "@id");
    }

    #[test]
    fn text_slot_changes_address_as_hash_text() {
        let mut left = Attributed::new();
        left.text = Some("old".into());
        let mut right = Attributed::new();
        right.text = Some("new".into());

        let delta = diff_nodes(&Node::Attributed(left), &Node::Attributed(right));
        assert_eq!(delta.len(), 1);
        assert_eq!(delta.changes[0].path().to_string(), "#text");
    }

    #[test]
    fn attributed_vs_mapping_is_a_kind_change() {
        let delta = diff_nodes(
            &Node::Attributed(Attributed::new()),
            &Node::Mapping(Mapping::new()),
        );
        assert_eq!(delta.kind_changes(), 1);
    }
}
