//! Structural comparison of two documents.

use tracing::debug;

use pf_diff::{diff_nodes, Delta, DiffError};
use pf_model::Notation;

use crate::error::EngineResult;

/// Compute the structural delta between two documents.
///
/// Both texts must parse successfully in the same notation. A cross-notation
/// request is rejected before any parsing happens; a parse failure on either
/// side surfaces that side's defect.
pub fn diff(
    left_text: &str,
    left_notation: Notation,
    right_text: &str,
    right_notation: Notation,
) -> EngineResult<Delta> {
    if left_notation != right_notation {
        return Err(DiffError::NotationMismatch {
            left: left_notation,
            right: right_notation,
        }
        .into());
    }
    debug!(notation = %left_notation, "diff");
    let left = pf_codec::parse(left_text, left_notation)?;
    let right = pf_codec::parse(right_text, right_notation)?;
    Ok(diff_nodes(&left, &right))
}
