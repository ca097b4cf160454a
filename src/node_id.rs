//! Hierarchical node identifiers and the structural key ordering built on them.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifies a node by its position in the document tree (dynamic level numbering).
///
/// The id of a node is the id of its parent extended by one more level, e.g. `1.3.2` is the
/// second child of `1.3`. Ids compare level by level and an ancestor sorts before all of its
/// descendants, which is exactly document order: `1 < 1.1 < 1.2 < 1.10 < 2`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    levels: Vec<u32>,
}

impl NodeId {
    /// The id of the document element.
    pub fn root() -> Self {
        Self { levels: vec![1] }
    }

    pub fn from_levels(levels: Vec<u32>) -> Result<Self, ParseNodeIdError> {
        if levels.is_empty() {
            return Err(ParseNodeIdError::Empty);
        }

        Ok(Self { levels })
    }

    pub fn parse(s: &str) -> Result<Self, ParseNodeIdError> {
        if s.is_empty() {
            return Err(ParseNodeIdError::Empty);
        }

        let levels = s
            .split('.')
            .enumerate()
            .map(|(position, level)| {
                if level.is_empty() {
                    return Err(ParseNodeIdError::EmptyLevel { position });
                }

                level
                    .parse::<u32>()
                    .map_err(|source| ParseNodeIdError::InvalidLevel {
                        position,
                        level: level.to_owned(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Depth in the tree, the document element is at level 1.
    pub fn level(&self) -> usize {
        self.levels.len()
    }

    pub fn parent(&self) -> Option<NodeId> {
        if self.levels.len() < 2 {
            return None;
        }

        Some(Self {
            levels: self.levels[..self.levels.len() - 1].to_vec(),
        })
    }

    pub fn child(&self, n: u32) -> NodeId {
        let mut levels = Vec::with_capacity(self.levels.len() + 1);
        levels.extend_from_slice(&self.levels);
        levels.push(n);

        Self { levels }
    }

    pub fn is_ancestor_of(&self, other: &NodeId) -> bool {
        other.levels.len() > self.levels.len() && other.levels.starts_with(&self.levels)
    }
}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut levels = self.levels.iter();
        if let Some(first) = levels.next() {
            write!(f, "{first}")?;
        }
        for level in levels {
            write!(f, ".{level}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNodeIdError {
    #[error("node id is empty")]
    Empty,
    #[error("node id has an empty level at position {position}")]
    EmptyLevel { position: usize },
    #[error("node id level `{level}` at position {position} is not a number")]
    InvalidLevel {
        position: usize,
        level: String,
        #[source]
        source: ParseIntError,
    },
}

/// Elements that are ordered by the position of a node in its document rather than by their
/// natural order.
pub trait StructuralKey {
    fn node_id(&self) -> &NodeId;
}

impl StructuralKey for NodeId {
    fn node_id(&self) -> &NodeId {
        self
    }
}

impl<T: StructuralKey + ?Sized> StructuralKey for &T {
    fn node_id(&self) -> &NodeId {
        (**self).node_id()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(pub u32);

/// Reference to a node inside a stored document, as handed around by query evaluation.
///
/// The natural order is by document first and then by node. The structural key ignores the
/// document.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef {
    pub doc: DocumentId,
    pub node: NodeId,
}

impl NodeRef {
    pub fn new(doc: DocumentId, node: NodeId) -> Self {
        Self { doc, node }
    }
}

impl StructuralKey for NodeRef {
    fn node_id(&self) -> &NodeId {
        &self.node
    }
}
