use anyhow::Result;
use content_embed_config::OutputFormat;
use content_embed_engine::{
    DisplayNode, DocumentTree, HtmlRenderer, InsertCommand, MdxRenderer, Registry, Renderer,
    TextRenderer,
};

/// Outcome of a batch run: the rendered document plus one message per rejected input
#[derive(Debug)]
pub struct BatchOutput {
    pub rendered: String,
    pub rejected: Vec<String>,
}

impl BatchOutput {
    pub fn all_inserted(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub fn run(registry: &Registry, format: OutputFormat, inputs: &[String]) -> Result<BatchOutput> {
    let command = InsertCommand::new(registry);
    let mut document = DocumentTree::new();
    let mut rejected = Vec::new();

    for input in inputs {
        match command.attempt_insert(&mut document, input) {
            Ok(inserted) => {
                log::debug!("{input:?} -> {} {}", inserted.kind, inserted.id);
            }
            Err(e) => rejected.push(format!("{input:?}: {e}")),
        }
    }

    Ok(BatchOutput {
        rendered: render(format, document.nodes())?,
        rejected,
    })
}

pub fn render(format: OutputFormat, nodes: &[DisplayNode]) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => TextRenderer::new().render_document(nodes),
        OutputFormat::Html => HtmlRenderer::new().render_document(nodes),
        OutputFormat::Email => HtmlRenderer::email().render_document(nodes),
        OutputFormat::Mdx => MdxRenderer::new().render_document(nodes),
        OutputFormat::Json => serde_json::to_string_pretty(nodes)?,
    };
    Ok(rendered)
}
