use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A concrete textual syntax for structured data.
///
/// The engine dispatches on this tag to select a parser/serializer pair;
/// each pair is an independent, stateless function set rather than a trait
/// hierarchy. Plaintext is deliberately absent: it is never a valid source
/// or target for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Json,
    Xml,
    Yaml,
}

impl Notation {
    /// All supported notations.
    pub const ALL: [Notation; 3] = [Notation::Json, Notation::Xml, Notation::Yaml];

    pub fn as_str(&self) -> &'static str {
        match self {
            Notation::Json => "json",
            Notation::Xml => "xml",
            Notation::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Notation::Json),
            "xml" => Ok(Notation::Xml),
            "yaml" | "yml" => Ok(Notation::Yaml),
            other => Err(UnknownNotation(other.to_owned())),
        }
    }
}

/// A notation name the engine does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notation {0:?} (expected json, xml, or yaml)")]
pub struct UnknownNotation(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_names() {
        assert_eq!("json".parse::<Notation>().unwrap(), Notation::Json);
        assert_eq!("XML".parse::<Notation>().unwrap(), Notation::Xml);
        assert_eq!("yaml".parse::<Notation>().unwrap(), Notation::Yaml);
        assert_eq!("yml".parse::<Notation>().unwrap(), Notation::Yaml);
    }

    #[test]
    fn parse_rejects_plaintext() {
        let err = "plaintext".parse::<Notation>().unwrap_err();
        assert_eq!(err, UnknownNotation("plaintext".into()));
    }

    #[test]
    fn display_roundtrips_through_fromstr() {
        for n in Notation::ALL {
            assert_eq!(n.to_string().parse::<Notation>().unwrap(), n);
        }
    }
}
