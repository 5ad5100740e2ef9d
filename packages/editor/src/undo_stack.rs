//! # Undo/Redo Stack
//!
//! Tracks document history and enables undo/redo.
//!
//! ## Design
//!
//! - Edits are pure, so history stores the document as it was *before* each
//!   step rather than computing inverses
//! - Undo swaps the current document for the stored snapshot and keeps the
//!   current one for redo
//! - New edits clear the redo stack
//! - Batches group several edits into one undo step by keeping only the
//!   snapshot taken before the first of them
//!
//! ## Example
//!
//! ```rust
//! use mailblocks_editor::UndoStack;
//! use mailblocks_model::{BlockKind, Document};
//!
//! let mut stack = UndoStack::new();
//! let mut doc = Document::new();
//!
//! stack.record(&doc, "Add Paragraph");
//! doc.push(BlockKind::Paragraph);
//!
//! let previous = stack.undo(&doc).unwrap();
//! assert!(previous.is_empty());
//! ```

use mailblocks_model::Document;

/// One undoable step
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Document state to return to
    pub snapshot: Document,

    /// Optional description of this step
    pub description: Option<String>,
}

impl HistoryEntry {
    fn new(snapshot: Document, description: Option<String>) -> Self {
        Self {
            snapshot,
            description,
        }
    }
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// States before applied edits (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// States after undone edits (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Open batch, if any
    current_batch: Option<HistoryEntry>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Record `before` as the state to return to for the edit about to land.
    ///
    /// Inside a batch only the first recorded state is kept.
    pub fn record(&mut self, before: &Document, description: impl Into<String>) {
        match &mut self.current_batch {
            Some(batch) => {
                if batch.description.is_none() {
                    batch.description = Some(description.into());
                }
            }
            None => {
                let entry = HistoryEntry::new(before.clone(), Some(description.into()));
                self.push_entry(entry);
            }
        }
    }

    /// Start a batch. `current` is the state the whole batch undoes to.
    pub fn begin_batch(&mut self, current: &Document) {
        self.current_batch = Some(HistoryEntry::new(current.clone(), None));
    }

    /// End the current batch and push it to the undo stack.
    ///
    /// A batch that ends on the state it started from leaves no entry.
    pub fn end_batch(&mut self, current: &Document) {
        if let Some(batch) = self.current_batch.take() {
            if batch.snapshot != *current {
                self.push_entry(batch);
            }
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    /// Whether a batch is open
    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates future
        self.redo_stack.clear();
    }

    /// Step back. Returns the document to restore, keeping `current` for redo.
    pub fn undo(&mut self, current: &Document) -> Option<Document> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack
            .push(HistoryEntry::new(current.clone(), entry.description.clone()));

        tracing::debug!(description = ?entry.description, "undo");
        Some(entry.snapshot)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: &Document) -> Option<Document> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack
            .push(HistoryEntry::new(current.clone(), entry.description.clone()));

        tracing::debug!(description = ?entry.description, "redo");
        Some(entry.snapshot)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
