use crate::editing::{Cursor, DocumentSink, DocumentTree, Patch, PublishError};
use crate::models::DisplayNode;

/// Sink that lets another writer slip in one edit right before the first publish,
/// simulating a second input channel racing the command
pub struct RacingSink {
    tree: DocumentTree,
    concurrent: Option<DisplayNode>,
}

impl RacingSink {
    pub fn new(tree: DocumentTree, concurrent: DisplayNode) -> Self {
        Self {
            tree,
            concurrent: Some(concurrent),
        }
    }

    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }
}

impl DocumentSink for RacingSink {
    fn cursor(&self) -> Cursor {
        self.tree.cursor()
    }

    fn publish(&mut self, node: DisplayNode, at: Cursor) -> Result<Patch, PublishError> {
        if let Some(concurrent) = self.concurrent.take() {
            let live = self.tree.cursor();
            self.tree
                .publish(concurrent, live)
                .expect("concurrent edit at live cursor");
        }
        self.tree.publish(node, at)
    }
}
