//! High-level engine surface for Polyform.
//!
//! This is the boundary the surrounding tooling (CLI, editors, anything
//! embedding the engine) calls into: canonical formatting, well-formedness
//! validation, notation conversion, and structural comparison. The engine is
//! stateless; every call parses, computes, and discards, and nothing is
//! retained across invocations. It performs no I/O and is safely callable
//! from multiple threads without synchronization.
//!
//! Callers supply the notation alongside the text; the engine never infers
//! a notation itself.

pub mod compare;
pub mod convert;
pub mod error;
pub mod validate;

pub use compare::diff;
pub use convert::{convert, format, ConversionRequest};
pub use error::{EngineError, EngineResult};
pub use validate::{validate, ValidationResult};

// Re-export key types
pub use pf_codec::{ParseError, Position, SerializeOptions, WriteError};
pub use pf_diff::{Change, Delta, DiffError, Path};
pub use pf_model::{Node, Notation, Scalar};
