use crate::editing::Cursor;
use crate::models::{ContentNode, DisplayNode};

/// Immutable document view for rendering.
///
/// Renderers read snapshots and never mutate the live document. `version`
/// lets a view skip re-rendering when nothing changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub version: u64,
    pub cursor: Cursor,
    pub nodes: Vec<DisplayNode>,
}

impl Snapshot {
    /// Top-level structured blocks in document order
    pub fn blocks(&self) -> impl Iterator<Item = &ContentNode> {
        self.nodes.iter().filter_map(DisplayNode::as_block)
    }
}
