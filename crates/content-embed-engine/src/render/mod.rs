//! # Renderer Adapters
//!
//! Convert published nodes into output for one surface. Every adapter must be
//! able to display every valid node: kinds it has no special rendering for
//! fall back to the node's children, so documents containing newer block
//! kinds still render.
//!
//! - **`text`**: terminal/editor view
//! - **`html`**: static site pages and email bodies
//! - **`mdx`**: MDX source with one JSX component per block

pub mod html;
pub mod mdx;
pub mod text;

pub use html::HtmlRenderer;
pub use mdx::MdxRenderer;
pub use text::TextRenderer;

use crate::models::{ContentNode, DisplayNode};

/// Node-to-output conversion for one rendering surface.
///
/// Rendering is read-only; implementations receive shared references only.
pub trait Renderer {
    /// Render a structured block, calling [`Renderer::render_fallback`] for
    /// kinds (or property sets) the adapter doesn't handle
    fn render_block(&self, node: &ContentNode) -> String;

    /// Render a plain text node
    fn render_text(&self, text: &str) -> String {
        text.to_string()
    }

    /// Render a block through its fallback children
    fn render_fallback(&self, node: &ContentNode) -> String {
        node.children()
            .iter()
            .map(|child| self.render(child))
            .collect()
    }

    fn render(&self, node: &DisplayNode) -> String {
        match node {
            DisplayNode::Text { value } => self.render_text(value),
            DisplayNode::Block(block) => self.render_block(block),
        }
    }

    /// Joins top-level nodes in [`Renderer::render_document`]
    fn separator(&self) -> &str {
        "\n"
    }

    fn render_document(&self, nodes: &[DisplayNode]) -> String {
        nodes
            .iter()
            .map(|node| self.render(node))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}
