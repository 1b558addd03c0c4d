//! Canonical formatting and notation conversion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use pf_codec::SerializeOptions;
use pf_model::Notation;

use crate::error::EngineResult;

/// A request to re-express a document in another notation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub source_text: String,
    pub source: Notation,
    pub target: Notation,
}

impl ConversionRequest {
    pub fn new(source_text: impl Into<String>, source: Notation, target: Notation) -> Self {
        Self {
            source_text: source_text.into(),
            source,
            target,
        }
    }
}

/// Canonically format a document: a full parse → serialize cycle in its own
/// notation.
pub fn format(text: &str, notation: Notation, options: &SerializeOptions) -> EngineResult<String> {
    debug!(%notation, bytes = text.len(), "format");
    let node = pf_codec::parse(text, notation)?;
    Ok(pf_codec::serialize(&node, notation, options)?)
}

/// Convert a document between notations.
///
/// A same-notation request still runs the full parse → serialize cycle, so
/// conversion canonicalizes exactly like [`format`]. Parse failures surface
/// the originating defect unchanged. Information loss across data models
/// (XML attribute structure, mixed arrays) is silent: the engine is a
/// best-effort converter, not a lossless-only one.
pub fn convert(request: &ConversionRequest, options: &SerializeOptions) -> EngineResult<String> {
    debug!(
        source = %request.source,
        target = %request.target,
        bytes = request.source_text.len(),
        "convert"
    );
    let node = pf_codec::parse(&request.source_text, request.source)?;
    Ok(pf_codec::serialize(&node, request.target, options)?)
}
