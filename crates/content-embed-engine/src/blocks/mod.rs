//! # Block Registry
//!
//! The closed set of structured block kinds an editor can insert.
//!
//! ## Modules
//!
//! - **`definition`**: `BlockDefinition` trait: aliases, validation, fallback children
//! - **`registry`**: `Registry` mapping kinds to definitions, with alias matching
//! - **`kinds`**: Built-in definitions (`KeywordBlock`, `VideoBlock`)
//!
//! ## Key Invariants
//!
//! - Kinds are unique; registering a kind twice is a startup error
//! - Matching is case-insensitive substring containment of any alias
//! - When several kinds match, the first registered wins

pub mod definition;
pub mod kinds;
pub mod registry;

pub use definition::BlockDefinition;
pub use kinds::{KeywordBlock, VideoBlock};
pub use registry::{Registry, RegistryError};
