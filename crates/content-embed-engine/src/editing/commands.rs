use crate::blocks::Registry;
use crate::editing::{DocumentSink, Patch, PublishError};
use crate::models::{BlockInput, ContentNode, NodeId, make_content_node};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    /// No registered kind has an alias in the input
    #[error("Unrecognized input: {input:?}")]
    UnrecognizedInput { input: String },
    /// A kind matched but its validator rejected the input
    #[error("Invalid {kind} input: {reason}")]
    InvalidProperties { kind: String, reason: String },
    /// The document changed under the command
    #[error("Publish failed: {0}")]
    PublishFailed(#[from] PublishError),
}

impl InsertError {
    /// Whether running the same insert again may succeed without new input
    pub fn is_retryable(&self) -> bool {
        matches!(self, InsertError::PublishFailed(_))
    }
}

/// A published block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inserted {
    pub id: NodeId,
    pub kind: String,
    pub patch: Patch,
}

pub type InsertResult = Result<Inserted, InsertError>;

/// Insert a structured block chosen by free-form input.
///
/// The command borrows the registry; the target document is passed to each
/// call so nothing about "the current editor" is global.
#[derive(Debug, Clone, Copy)]
pub struct InsertCommand<'r> {
    registry: &'r Registry,
}

impl<'r> InsertCommand<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Resolve, validate and build a block from `raw_input`, then publish it
    /// at the cursor `sink` had when the call started.
    ///
    /// On any error the document is left exactly as it was, except that a
    /// concurrent writer may have changed it (reported as
    /// [`InsertError::PublishFailed`]).
    pub fn attempt_insert<S>(&self, sink: &mut S, raw_input: &str) -> InsertResult
    where
        S: DocumentSink + ?Sized,
    {
        let at = sink.cursor();
        let node = self.build_node(raw_input)?;
        let id = node.id();
        let kind = node.kind().to_string();

        match sink.publish(node.into(), at) {
            Ok(patch) => {
                log::debug!("Inserted {kind} block {id} at {}", patch.inserted_at);
                Ok(Inserted { id, kind, patch })
            }
            Err(e) => {
                log::warn!("Dropped {kind} block: {e}");
                Err(e.into())
            }
        }
    }

    fn build_node(&self, raw_input: &str) -> Result<ContentNode, InsertError> {
        let input = BlockInput::new(raw_input);

        let Some(definition) = self.registry.resolve_input(&input) else {
            log::info!("No block kind matches {:?}", input.normalized());
            return Err(InsertError::UnrecognizedInput {
                input: input.normalized().to_string(),
            });
        };

        let properties = definition.validate(&input).map_err(|reason| {
            log::info!("Rejected {} input: {reason}", definition.kind());
            InsertError::InvalidProperties {
                kind: definition.kind().to_string(),
                reason,
            }
        })?;

        Ok(make_content_node(
            definition.kind(),
            properties,
            definition.fallback_children(&input),
        ))
    }
}
