use std::fmt;

use crate::blocks::{BlockDefinition, KeywordBlock, VideoBlock};
use crate::models::BlockInput;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Block kind already registered: {0}")]
    DuplicateKind(String),
    #[error("Block kind must not be empty")]
    EmptyKind,
    #[error("Block kind {0} declares no aliases")]
    NoAliases(String),
}

/// Process-wide set of block definitions, in registration order.
///
/// Built once at startup and only read afterwards; every lookup takes `&self`.
#[derive(Default)]
pub struct Registry {
    definitions: Vec<Box<dyn BlockDefinition>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the stock `teacher-profile` and `video` kinds
    pub fn with_builtin_blocks() -> Self {
        Self {
            definitions: vec![
                Box::new(KeywordBlock::teacher_profile()),
                Box::new(VideoBlock::new()),
            ],
        }
    }

    /// Add a definition under its kind.
    ///
    /// A kind can only be registered once; a second registration is a
    /// configuration bug and is rejected instead of replacing the first.
    pub fn register<D>(&mut self, definition: D) -> Result<(), RegistryError>
    where
        D: BlockDefinition + 'static,
    {
        self.register_boxed(Box::new(definition))
    }

    pub fn register_boxed(
        &mut self,
        definition: Box<dyn BlockDefinition>,
    ) -> Result<(), RegistryError> {
        let kind = definition.kind();
        if kind.trim().is_empty() {
            return Err(RegistryError::EmptyKind);
        }
        if self.resolve(kind).is_some() {
            return Err(RegistryError::DuplicateKind(kind.to_string()));
        }
        if definition.aliases().iter().all(|alias| alias.trim().is_empty()) {
            return Err(RegistryError::NoAliases(kind.to_string()));
        }

        log::debug!("Registered block kind {kind}");
        self.definitions.push(definition);
        Ok(())
    }

    /// Look up the definition for an exact kind
    pub fn resolve(&self, kind: &str) -> Option<&dyn BlockDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.kind() == kind)
            .map(|definition| &**definition)
    }

    /// Every kind whose aliases match `raw_input`, in registration order
    pub fn matching_kinds(&self, raw_input: &str) -> Vec<&str> {
        let input = BlockInput::new(raw_input);
        self.definitions
            .iter()
            .filter(|definition| definition.matches(&input))
            .map(|definition| definition.kind())
            .collect()
    }

    /// Pick the definition for `input`; the first registered match wins
    pub fn resolve_input(&self, input: &BlockInput) -> Option<&dyn BlockDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.matches(input))
            .map(|definition| &**definition)
    }

    /// Registered kinds in registration order
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|definition| definition.kind())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}
