//! Error types for the diff crate.

use pf_model::Notation;

/// Errors that can occur when requesting a structural diff.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The two documents were parsed from different notations. A structural
    /// delta is only defined between trees of the same notation; comparing,
    /// say, XML's attributed shape against a plain JSON mapping is rejected
    /// at the boundary instead of silently compared.
    #[error("cannot diff across notations: left is {left}, right is {right}")]
    NotationMismatch { left: Notation, right: Notation },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
