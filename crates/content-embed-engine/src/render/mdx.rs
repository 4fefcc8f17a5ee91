use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{ContentNode, PropertyValue};
use crate::render::Renderer;

/// MDX source output: each block becomes a JSX component named after its kind.
///
/// `teacher-profile` becomes `<EmbedTeacherProfile …>`. Properties are
/// written as attributes and fallback children as the component body, so the
/// site build can map components it knows and still show the children for the
/// rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct MdxRenderer;

impl MdxRenderer {
    pub fn new() -> Self {
        Self
    }

    /// JSX component name for a block kind: `Embed` + PascalCase kind
    pub fn component_name(kind: &str) -> String {
        let mut name = String::from("Embed");
        for word in kind.split(['-', '_', ' ']).filter(|word| !word.is_empty()) {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
        name
    }

    fn attribute(name: &str, value: &PropertyValue) -> String {
        match value {
            PropertyValue::Text(text) => {
                format!(r#"{name}="{}""#, encode_double_quoted_attribute(text))
            }
            PropertyValue::Integer(number) => format!("{name}={{{number}}}"),
            PropertyValue::Flag(true) => name.to_string(),
            PropertyValue::Flag(false) => format!("{name}={{false}}"),
        }
    }
}

impl Renderer for MdxRenderer {
    fn render_block(&self, node: &ContentNode) -> String {
        let component = Self::component_name(node.kind());
        let mut open = format!("<{component}");
        for (name, value) in node.properties() {
            open.push(' ');
            open.push_str(&Self::attribute(name, value));
        }

        if node.children().is_empty() {
            return format!("{open} />");
        }
        format!("{open}>{}</{component}>", self.render_fallback(node))
    }

    fn render_text(&self, text: &str) -> String {
        encode_text(text).replace('{', "&#123;").replace('}', "&#125;")
    }

    fn separator(&self) -> &str {
        "\n\n"
    }
}
