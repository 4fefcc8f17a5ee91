pub mod blocks;
pub mod editing;
pub mod models;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::{BlockDefinition, KeywordBlock, Registry, RegistryError, VideoBlock};
pub use editing::{
    Cursor, DocumentSink, DocumentTree, InsertCommand, InsertError, InsertResult, Inserted, Patch,
    PublishError, SharedDocument, Snapshot,
};
pub use models::{BlockInput, ContentNode, DisplayNode, NodeId, Properties, PropertyValue};
pub use render::{HtmlRenderer, MdxRenderer, Renderer, TextRenderer};
