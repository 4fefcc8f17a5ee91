use std::sync::{Arc, Mutex, MutexGuard};

use crate::editing::{Cursor, DocumentSink, DocumentTree, Patch, PublishError, Snapshot};
use crate::models::DisplayNode;

/// Clonable handle to one document shared by several input channels.
///
/// The lock is taken separately for reading the cursor and for publishing,
/// never across a whole command, so interleaved edits surface as
/// [`PublishError::StaleCursor`] rather than blocking.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<Mutex<DocumentTree>>,
}

impl SharedDocument {
    pub fn new(tree: DocumentTree) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DocumentTree> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn move_cursor(&self, position: usize) -> Cursor {
        self.lock().move_cursor(position)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl DocumentSink for SharedDocument {
    fn cursor(&self) -> Cursor {
        self.lock().cursor()
    }

    fn publish(&mut self, node: DisplayNode, at: Cursor) -> Result<Patch, PublishError> {
        self.lock().publish(node, at)
    }
}
