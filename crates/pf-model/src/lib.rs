//! Canonical document model for Polyform.
//!
//! This crate provides the format-neutral tree that every supported notation
//! parses into and serializes from. Every other Polyform crate depends on
//! `pf-model`.
//!
//! # Key Types
//!
//! - [`Node`] — Recursive sum type over scalars, sequences, and mappings
//! - [`Scalar`] / [`Number`] — Leaf values with cross-variant numeric equality
//! - [`Mapping`] — Order-preserving map with unique string keys
//! - [`Attributed`] — XML-specific overlay carrying attributes and a text slot
//! - [`Notation`] — Tag selecting among the JSON/XML/YAML codec pairs
//!
//! [`Node`] implements [`serde::Serialize`] and [`serde::Deserialize`]
//! directly (see `ser`/`de`), so serde-based codecs read and write the
//! canonical tree in document order without an intermediate value type.

pub mod node;
pub mod notation;
pub mod scalar;

mod de;
mod ser;

pub use node::{Attributed, Mapping, Node, NodeKind};
pub use notation::{Notation, UnknownNotation};
pub use scalar::{Number, Scalar};
