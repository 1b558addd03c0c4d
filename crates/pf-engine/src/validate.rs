//! Well-formedness validation.

use serde::Serialize;
use tracing::debug;

use pf_model::Notation;

/// The verdict of a well-formedness check.
///
/// `error` is populated only when the document is invalid and carries the
/// parser's message, position-aware when the parser provides one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// A passing verdict.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing verdict with the parser's message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Check `text` for well-formedness under `notation`.
///
/// Delegates to the matching parser and discards the tree immediately;
/// only the verdict survives the call.
pub fn validate(text: &str, notation: Notation) -> ValidationResult {
    debug!(%notation, bytes = text.len(), "validate");
    match pf_codec::parse(text, notation) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => ValidationResult::invalid(e.to_string()),
    }
}
