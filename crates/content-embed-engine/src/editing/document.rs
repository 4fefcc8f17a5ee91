use std::fmt;

use crate::editing::{Patch, Snapshot};
use crate::models::{ContentNode, DisplayNode, NodeId};

/// Insertion point captured from a document.
///
/// Two cursors are equal only if both the position and the document version
/// match, so a cursor captured before any concurrent change compares unequal
/// to the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Index the next node will be inserted at (0..=len)
    pub position: usize,
    /// Document version the position refers to
    pub version: u64,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {} at version {}", self.position, self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("Stale cursor: captured {expected}, document is now at {actual}")]
    StaleCursor { expected: Cursor, actual: Cursor },
}

/// Destination of published nodes, owned by the editor surface.
///
/// All structural changes to a document go through `publish`.
pub trait DocumentSink {
    /// Current insertion point
    fn cursor(&self) -> Cursor;

    /// Splice `node` in at `at`, advancing the cursor past it.
    ///
    /// Fails with [`PublishError::StaleCursor`] if the document's cursor is no
    /// longer `at`.
    fn publish(&mut self, node: DisplayNode, at: Cursor) -> Result<Patch, PublishError>;
}

/// In-memory document: ordered display nodes plus an insertion cursor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTree {
    nodes: Vec<DisplayNode>,
    /// Index of the next insert
    position: usize,
    /// Incremented on every structural change
    version: u64,
}

impl DocumentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from existing nodes with the cursor at the end
    pub fn from_nodes(nodes: Vec<DisplayNode>) -> Self {
        let position = nodes.len();
        Self {
            nodes,
            position,
            version: 0,
        }
    }

    pub fn nodes(&self) -> &[DisplayNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            position: self.position,
            version: self.version,
        }
    }

    /// Move the insertion point, clamped to the end of the document.
    ///
    /// Any cursor captured before the move becomes stale unless the position
    /// is unchanged.
    pub fn move_cursor(&mut self, position: usize) -> Cursor {
        self.position = position.min(self.nodes.len());
        self.cursor()
    }

    /// Find a structured block by id, with its index
    pub fn find(&self, id: NodeId) -> Option<(usize, &ContentNode)> {
        self.nodes
            .iter()
            .enumerate()
            .find_map(|(index, node)| match node.as_block() {
                Some(block) if block.id() == id => Some((index, block)),
                _ => None,
            })
    }

    /// Immutable view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            cursor: self.cursor(),
            nodes: self.nodes.clone(),
        }
    }

    pub fn publish(&mut self, node: DisplayNode, at: Cursor) -> Result<Patch, PublishError> {
        let actual = self.cursor();
        if at != actual {
            return Err(PublishError::StaleCursor {
                expected: at,
                actual,
            });
        }

        let inserted_at = self.position;
        self.nodes.insert(inserted_at, node);
        self.position = inserted_at + 1;
        self.version += 1;

        Ok(Patch {
            inserted_at,
            new_cursor: self.cursor(),
        })
    }
}

impl DocumentSink for DocumentTree {
    fn cursor(&self) -> Cursor {
        DocumentTree::cursor(self)
    }

    fn publish(&mut self, node: DisplayNode, at: Cursor) -> Result<Patch, PublishError> {
        DocumentTree::publish(self, node, at)
    }
}
