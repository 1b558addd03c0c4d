use thiserror::Error;

use pf_codec::{ParseError, WriteError};
use pf_diff::DiffError;

/// Errors surfaced at the engine boundary.
///
/// Every failure is an explicit result, never an uncaught fault. Every
/// call is independently retryable with corrected input; the engine holds
/// no process-wide state for an error to poison.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A parse failure, surfaced verbatim so callers can report the exact
    /// originating defect.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A serialization failure.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// A rejected diff request.
    #[error(transparent)]
    Diff(#[from] DiffError),

    /// Reserved for conversions that are structurally undefined. Every
    /// notation pair currently has a defined (possibly lossy) mapping, so
    /// this variant is never constructed.
    #[error("conversion not defined: {0}")]
    Conversion(String),
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
