//! The structured change set produced by a diff.

use std::fmt;

use serde::{Serialize, Serializer};

use pf_model::{Node, Scalar};

/// The result of comparing two canonical trees.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Delta {
    /// The list of classified changes.
    pub changes: Vec<Change>,
}

impl Delta {
    /// Create an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added keys/indices.
    pub fn additions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Added { .. }))
            .count()
    }

    /// Number of removed keys/indices.
    pub fn removals(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Removed { .. }))
            .count()
    }

    /// Number of changed scalar values.
    pub fn value_changes(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::Changed { .. }))
            .count()
    }

    /// Number of node-type changes.
    pub fn kind_changes(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::KindChanged { .. }))
            .count()
    }
}

/// A single classified difference between two trees.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// A key or index present only in the right tree.
    Added { path: Path, value: Node },
    /// A key or index present only in the left tree.
    Removed { path: Path, value: Node },
    /// The scalar value at a path changed.
    Changed { path: Path, old: Scalar, new: Scalar },
    /// The node at a path changed variant (e.g. scalar to sequence).
    KindChanged { path: Path, old: Node, new: Node },
}

impl Change {
    /// The location of this change.
    pub fn path(&self) -> &Path {
        match self {
            Change::Added { path, .. }
            | Change::Removed { path, .. }
            | Change::Changed { path, .. }
            | Change::KindChanged { path, .. } => path,
        }
    }
}

/// The location of a change inside a tree.
///
/// Displays as `a.b[2]`; XML attributes address as `@name` keys and the
/// text slot as `#text`, matching the overlay's mapping projection. The
/// root path displays as `$`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path segments, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The path extended by a mapping key.
    pub fn child(&self, key: &str) -> Path {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.to_owned()));
        Path { segments }
    }

    /// The path extended by a sequence index.
    pub fn index(&self, index: usize) -> Path {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Path { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
