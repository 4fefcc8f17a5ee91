use crate::blocks::{KeywordBlock, VideoBlock};
use crate::models::ContentNode;
use crate::render::Renderer;

/// Plain-text rendering for the interactive editor view
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    fn render_block(&self, node: &ContentNode) -> String {
        match node.kind() {
            KeywordBlock::TEACHER_PROFILE => match node.text_property("teacherInput") {
                Some(teacher) => format!("🧑‍🏫 Teacher profile: {teacher}"),
                None => self.render_fallback(node),
            },
            VideoBlock::KIND => match node.text_property("url") {
                Some(url) => {
                    let caption = node.text_property("caption").unwrap_or("Video");
                    format!("▶ {caption} <{url}>")
                }
                None => self.render_fallback(node),
            },
            _ => self.render_fallback(node),
        }
    }
}
