//! Error types for parsing and serialization.

use std::fmt;

use pf_model::Notation;
use thiserror::Error;

/// A 1-based line/column position inside the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors produced when parsing a document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input was empty or whitespace-only. Rejected before any
    /// notation-specific parsing is attempted.
    #[error("input is empty")]
    Empty,

    /// The document is malformed under its notation's grammar. The message
    /// comes from the underlying parser and carries the defect position
    /// where the parser provides one.
    #[error("invalid {notation}: {message}")]
    Syntax {
        notation: Notation,
        message: String,
        position: Option<Position>,
    },
}

impl ParseError {
    /// The structured defect position, when the underlying parser reported one.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Empty => None,
            ParseError::Syntax { position, .. } => *position,
        }
    }
}

/// Errors produced when serializing a canonical tree.
#[derive(Debug, Error)]
pub enum WriteError {
    /// XML requires the root node to resolve to exactly one named element.
    #[error("xml document must have exactly one root element, got {0}")]
    XmlRoot(String),

    /// The underlying emitter failed.
    #[error("serialization failed: {0}")]
    Emit(String),
}

/// Convenience alias for parse results.
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience alias for serialization results.
pub type WriteResult<T> = Result<T, WriteError>;
