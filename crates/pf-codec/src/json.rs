//! JSON parsing and serialization.
//!
//! Parsing is strict RFC 8259: trailing commas, comments, and unquoted keys
//! are all syntax defects. Serialization pretty-prints with a configurable
//! indent; mapping keys replay in insertion order and numbers print the
//! minimal representation that round-trips to the same value.

use serde::de::Deserialize;
use serde::ser::Serialize;

use pf_model::{Node, Notation};

use crate::error::{ParseError, ParseResult, Position, WriteError, WriteResult};
use crate::SerializeOptions;

pub fn parse(text: &str) -> ParseResult<Node> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    let node = Node::deserialize(&mut deserializer).map_err(syntax_error)?;
    deserializer.end().map_err(syntax_error)?;
    Ok(node)
}

pub fn serialize(node: &Node, options: &SerializeOptions) -> WriteResult<String> {
    let indent = " ".repeat(options.indent);
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    node.serialize(&mut serializer)
        .map_err(|e| WriteError::Emit(e.to_string()))?;
    out.push(b'\n');
    String::from_utf8(out).map_err(|e| WriteError::Emit(e.to_string()))
}

fn syntax_error(e: serde_json::Error) -> ParseError {
    let position = (e.line() > 0).then(|| Position {
        line: e.line(),
        column: e.column(),
    });
    ParseError::Syntax {
        notation: Notation::Json,
        message: e.to_string(),
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_model::{Number, Scalar};
    use proptest::prelude::*;

    fn fmt(text: &str) -> String {
        serialize(&parse(text).unwrap(), &SerializeOptions::default()).unwrap()
    }

    #[test]
    fn strict_grammar_rejects_trailing_comma() {
        let err = parse(r#"{"a": 1,}"#).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn strict_grammar_rejects_comments() {
        assert!(parse("{\"a\": 1} // note").is_err());
        assert!(parse("/* lead */ {\"a\": 1}").is_err());
    }

    #[test]
    fn strict_grammar_rejects_unquoted_keys() {
        assert!(parse("{a: 1}").is_err());
    }

    #[test]
    fn syntax_error_carries_position() {
        let err = parse("{\n  \"a\":}").unwrap_err();
        let ParseError::Syntax { message, position, .. } = err else {
            panic!("expected Syntax");
        };
        assert!(!message.is_empty());
        let pos = position.expect("serde_json reports a position");
        assert_eq!(pos.line, 2);
    }

    #[test]
    fn pretty_output_uses_two_space_default() {
        assert_eq!(fmt(r#"{"a":[1,2]}"#), "{\n  \"a\": [\n    1,\n    2\n  ]\n}\n");
    }

    #[test]
    fn indent_width_is_configurable() {
        let node = parse(r#"{"a":1}"#).unwrap();
        let four = serialize(&node, &SerializeOptions { indent: 4 }).unwrap();
        assert_eq!(four, "{\n    \"a\": 1\n}\n");
    }

    #[test]
    fn key_order_is_insertion_order() {
        let out = fmt(r#"{"z": 1, "a": 2, "m": 3}"#);
        let z = out.find("\"z\"").unwrap();
        let a = out.find("\"a\"").unwrap();
        let m = out.find("\"m\"").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn numbers_print_minimal_roundtrip_form() {
        let out = fmt(r#"{"a": 1.5, "b": 10, "c": 0.1}"#);
        assert!(out.contains("1.5"));
        assert!(out.contains("10"));
        assert!(out.contains("0.1"));
    }

    #[test]
    fn large_unsigned_integers_survive() {
        let text = format!(r#"{{"n": {}}}"#, u64::MAX);
        let node = parse(&text).unwrap();
        let mapping = node.as_mapping().unwrap();
        assert_eq!(
            mapping.get("n").unwrap().as_scalar(),
            Some(&Scalar::Number(Number::UInt(u64::MAX)))
        );
    }

    #[test]
    fn trailing_garbage_is_a_syntax_error() {
        assert!(parse(r#"{"a": 1} {"b": 2}"#).is_err());
    }

    fn arb_node() -> impl Strategy<Value = Node> {
        let scalar = prop_oneof![
            Just(Node::null()),
            any::<bool>().prop_map(|b| Node::Scalar(Scalar::Bool(b))),
            any::<i64>().prop_map(|v| Node::Scalar(Scalar::Number(Number::Int(v)))),
            "[a-z0-9 ]{0,12}".prop_map(|s| Node::string(s)),
        ];
        scalar.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Node::Sequence),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                    .prop_map(|entries| Node::Mapping(entries.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn serialize_parse_roundtrips_structurally(node in arb_node()) {
            let text = serialize(&node, &SerializeOptions::default()).unwrap();
            let reparsed = parse(&text).unwrap();
            prop_assert_eq!(node, reparsed);
        }
    }
}
