//! YAML parsing and serialization.
//!
//! Accepts YAML 1.2 in block or flow style. Anchors and aliases resolve to
//! their referenced value during parsing; an alias that would expand into
//! itself fails as a syntax defect instead of recursing. A stream holding
//! multiple documents parses to its first document only: a scoping
//! decision, not silent truncation.
//!
//! Serialization is block style with the emitter's minimal-quoting rule:
//! scalars are quoted only when required to disambiguate type or escape
//! special characters.

use serde::de::Deserialize;

use pf_model::{Node, Notation};

use crate::error::{ParseError, ParseResult, Position, WriteError, WriteResult};

pub fn parse(text: &str) -> ParseResult<Node> {
    let mut documents = serde_yaml::Deserializer::from_str(text);
    let Some(first) = documents.next() else {
        return Err(ParseError::Empty);
    };
    Node::deserialize(first).map_err(syntax_error)
}

pub fn serialize(node: &Node) -> WriteResult<String> {
    serde_yaml::to_string(node).map_err(|e| WriteError::Emit(e.to_string()))
}

fn syntax_error(e: serde_yaml::Error) -> ParseError {
    let position = e.location().map(|loc| Position {
        line: loc.line(),
        column: loc.column(),
    });
    ParseError::Syntax {
        notation: Notation::Yaml,
        message: e.to_string(),
        position,
    }
}
