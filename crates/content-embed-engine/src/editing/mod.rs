/*!
 * # Editing Core Module
 *
 * Turns free-form user input into structured blocks spliced into a document.
 *
 * ## Architecture Overview
 *
 * ### 1. Explicit Document Sink
 * - The document being edited is passed to every command as a **`DocumentSink`**
 * - A sink exposes exactly two operations: read the current **`Cursor`** and
 *   **`publish`** a node at a previously captured cursor
 * - No other path mutates the document structure
 *
 * ### 2. Optimistic Concurrency
 * - A `Cursor` is `{ position, version }`; the version increments on every publish
 * - `publish` compares the captured cursor with the live one and fails with
 *   `StaleCursor` when anything moved in between, instead of inserting at the wrong spot
 * - Callers retry by running the same command again; no lock is held across a command
 *
 * ### 3. Validate, Then Build, Then Publish
 * - **`InsertCommand`** resolves the input against the block **`Registry`**,
 *   runs the kind's validator and only then builds the `ContentNode`
 * - Failures return a typed **`InsertError`** and leave the document untouched
 *
 * ### 4. Read API: Immutable Snapshots
 * - Renderers read a **`Snapshot`** (version, cursor, nodes) and never touch the tree
 *
 * ## Module Structure
 *
 * - **`document`**: `DocumentTree`, `Cursor`, `DocumentSink`, `PublishError`
 * - **`shared`**: `SharedDocument`, a clonable handle for several input channels
 * - **`commands`**: `InsertCommand` and its result types
 * - **`patch`**: Publish result metadata (insert position, new cursor)
 * - **`snapshot`**: Immutable view for rendering
 *
 * ## Usage Pattern
 *
 * ```rust
 * use content_embed_engine::{DocumentTree, InsertCommand, Registry, Renderer, TextRenderer};
 *
 * let registry = Registry::with_builtin_blocks();
 * let mut doc = DocumentTree::new();
 *
 * let inserted = InsertCommand::new(&registry)
 *     .attempt_insert(&mut doc, "Filip")
 *     .unwrap();
 * assert_eq!(inserted.kind, "teacher-profile");
 *
 * let snapshot = doc.snapshot();
 * let text = TextRenderer::new().render_document(&snapshot.nodes);
 * assert!(text.contains("filip"));
 * ```
 */

pub mod commands;
pub mod document;
pub mod patch;
pub mod shared;
pub mod snapshot;

pub use commands::{InsertCommand, InsertError, InsertResult, Inserted};
pub use document::{Cursor, DocumentSink, DocumentTree, PublishError};
pub use patch::Patch;
pub use shared::SharedDocument;
pub use snapshot::Snapshot;
