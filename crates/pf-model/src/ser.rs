//! Serde serialization for the canonical tree.
//!
//! Mappings replay their entries in insertion order. The [`Attributed`]
//! overlay projects into plain map form: attributes as `@name` keys, the
//! text slot as `#text`, then child entries. This is the documented lossy
//! rendering of XML structure in notations that have no attribute concept.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::node::Node;
use crate::scalar::{Number, Scalar};

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Int(v) => serializer.serialize_i64(v),
            Number::UInt(v) => serializer.serialize_u64(v),
            Number::Float(v) => serializer.serialize_f64(v),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Scalar(s) => s.serialize(serializer),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(mapping.len()))?;
                for (key, value) in mapping.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::Attributed(attributed) => {
                let len = attributed.attributes.len()
                    + usize::from(attributed.text.is_some())
                    + attributed.children.len();
                let mut map = serializer.serialize_map(Some(len))?;
                for (name, value) in &attributed.attributes {
                    map.serialize_entry(&format!("@{name}"), value)?;
                }
                if let Some(text) = &attributed.text {
                    map.serialize_entry("#text", text)?;
                }
                for (key, value) in attributed.children.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
