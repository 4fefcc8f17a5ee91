pub mod block_input;
pub mod content_node;

pub use block_input::BlockInput;
pub use content_node::{ContentNode, DisplayNode, NodeId, Properties, PropertyValue};
pub(crate) use content_node::make_content_node;
