use crate::editing::Cursor;

/// Result of publishing a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    /// Index the node was spliced in at
    pub inserted_at: usize,
    /// Cursor after the insert, just past the new node. Its `version` is the
    /// document version the insert produced.
    pub new_cursor: Cursor,
}
