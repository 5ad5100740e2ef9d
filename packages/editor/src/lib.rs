//! # Mailblocks Editor
//!
//! Edit operations and session state for block documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document, Block, Theme               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + session state           │
//! │  - Pure operations (old value → new value)  │
//! │  - Snapshot undo/redo                       │
//! │  - Selection that follows its block         │
//! │  - Cached preview rendering                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: Document → email HTML        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Values, not references**: every edit yields a new document
//! 2. **Ids are stable**: blocks are addressed by id, never reused
//! 3. **Boundaries are quiet**: moving past either end is a no-op
//!
//! ## Usage
//!
//! ```rust
//! use mailblocks_editor::{EditSession, Mutation};
//! use mailblocks_model::{BlockKind, Document};
//!
//! let mut session = EditSession::new("local", Document::new());
//! session.apply(&Mutation::Insert { kind: BlockKind::Heading })?;
//! session.apply(&Mutation::Insert { kind: BlockKind::Paragraph })?;
//! session.apply(&Mutation::Move { index: 1, offset: -1 })?;
//!
//! assert_eq!(session.document().get(0).unwrap().kind, BlockKind::Paragraph);
//! assert!(session.undo());
//! # Ok::<(), mailblocks_editor::EditorError>(())
//! ```

mod errors;
mod mutations;
pub mod operations;
mod pipeline;
mod session;
mod undo_stack;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use operations::{EditEffect, EditOutcome};
pub use pipeline::{PipelineResult, PreviewPipeline};
pub use session::EditSession;
pub use undo_stack::{HistoryEntry, UndoStack};
