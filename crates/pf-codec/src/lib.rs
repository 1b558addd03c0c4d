//! Parsers and serializers for the supported notations.
//!
//! Each notation is an independent, stateless parse/serialize function pair;
//! [`parse`] and [`serialize`] dispatch on the [`Notation`] tag. Parsing
//! produces the canonical [`Node`] tree or a [`ParseError`]; serialization
//! renders a canonical, deterministic text form.
//!
//! Empty or whitespace-only input is rejected up front with
//! [`ParseError::Empty`], before any notation-specific parsing runs.

pub mod error;
pub mod json;
pub mod xml;
pub mod yaml;

pub use error::{ParseError, ParseResult, Position, WriteError, WriteResult};

use pf_model::{Node, Notation};

/// Serialization options shared by the notation serializers.
#[derive(Debug, Clone, Copy)]
pub struct SerializeOptions {
    /// Indentation width in spaces. Applies to JSON and XML; YAML uses the
    /// emitter's fixed block-style indentation.
    pub indent: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Parse `text` as the given notation into the canonical tree.
pub fn parse(text: &str, notation: Notation) -> ParseResult<Node> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    match notation {
        Notation::Json => json::parse(text),
        Notation::Xml => xml::parse(text),
        Notation::Yaml => yaml::parse(text),
    }
}

/// Serialize a canonical tree to the given notation's canonical text form.
pub fn serialize(node: &Node, notation: Notation, options: &SerializeOptions) -> WriteResult<String> {
    match notation {
        Notation::Json => json::serialize(node, options),
        Notation::Xml => xml::serialize(node, options),
        Notation::Yaml => yaml::serialize(node),
    }
}
