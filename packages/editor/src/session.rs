//! # Edit Session Management
//!
//! An EditSession is one operator's view of a document: the current
//! document value, the selected block and the undo history.
//!
//! The document is replaced wholesale on every edit. Selection is re-derived
//! from the [`EditEffect`] the edit reports, so it keeps pointing at the same
//! block across moves and removals.

use crate::operations::EditEffect;
use crate::{EditorError, Mutation, UndoStack};
use mailblocks_model::{Block, Document};

/// Single edit session
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    document: Document,

    /// Bumped on every applied edit, undo and redo
    version: u64,

    /// Index of the selected block
    selection: Option<usize>,

    history: UndoStack,
}

impl EditSession {
    /// Create new edit session
    pub fn new(id: impl Into<String>, document: Document) -> Self {
        Self {
            id: id.into(),
            document,
            version: 0,
            selection: None,
            history: UndoStack::new(),
        }
    }

    /// Apply a mutation, record history and update the selection.
    ///
    /// Edits that change nothing are not recorded and do not bump the version.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<EditEffect, EditorError> {
        let outcome = mutation.apply(&self.document)?;

        if outcome.effect != EditEffect::Unchanged {
            self.history.record(&self.document, mutation.describe());
            self.document = outcome.document;
            self.version += 1;
            self.selection = reselect(self.selection, &outcome.effect, self.document.len());
        }

        tracing::debug!(
            session = %self.id,
            mutation = mutation.name(),
            version = self.version,
            "applied mutation"
        );
        Ok(outcome.effect)
    }

    /// Group the following edits into one undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch(&self.document);
        self.history.set_batch_description(description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch(&self.document);
    }

    /// Returns `false` when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.document) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.document) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, document: Document) {
        self.document = document;
        self.version += 1;
        self.selection = clamp_selection(self.selection, self.document.len());
    }

    /// Select the block at `index`, or clear the selection with `None`
    pub fn select(&mut self, index: Option<usize>) -> Result<(), EditorError> {
        if let Some(index) = index {
            let len = self.document.len();
            if index >= len {
                return Err(EditorError::InvalidSelection { index, len });
            }
        }
        self.selection = index;
        Ok(())
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selection.and_then(|index| self.document.get(index))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }
}

/// Where the selection lands after an edit
fn reselect(selection: Option<usize>, effect: &EditEffect, len: usize) -> Option<usize> {
    match *effect {
        EditEffect::Inserted { index, .. } | EditEffect::Duplicated { index, .. } => Some(index),
        EditEffect::Moved { from, to } => selection.map(|selected| {
            if selected == from {
                to
            } else if selected == to {
                from
            } else {
                selected
            }
        }),
        EditEffect::Removed { index, .. } => match selection {
            Some(selected) if selected == index => {
                if len == 0 {
                    None
                } else {
                    Some(index.saturating_sub(1))
                }
            }
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        },
        EditEffect::Updated { .. } | EditEffect::ThemeChanged | EditEffect::Unchanged => {
            clamp_selection(selection, len)
        }
    }
}

fn clamp_selection(selection: Option<usize>, len: usize) -> Option<usize> {
    match selection {
        Some(_) if len == 0 => None,
        Some(selected) => Some(selected.min(len - 1)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblocks_model::{Attributes, BlockKind};

    fn session() -> EditSession {
        EditSession::new("client-1", Document::starter())
    }

    #[test]
    fn test_session_creation() {
        let session = session();

        assert_eq!(session.id, "client-1");
        assert_eq!(session.version(), 0);
        assert_eq!(session.selection(), None);
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_insert_selects_new_block() {
        let mut session = session();
        session
            .apply(&Mutation::Insert { kind: BlockKind::Image })
            .unwrap();

        assert_eq!(session.selection(), Some(5));
        assert_eq!(session.selected_block().unwrap().kind, BlockKind::Image);
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn test_selection_follows_moved_block() {
        let mut session = session();
        session.select(Some(1)).unwrap();
        let selected_id = session.selected_block().unwrap().id.clone();

        session.apply(&Mutation::Move { index: 1, offset: 1 }).unwrap();

        assert_eq!(session.selection(), Some(2));
        assert_eq!(session.selected_block().unwrap().id, selected_id);
    }

    #[test]
    fn test_selection_swaps_when_target_selected() {
        let mut session = session();
        session.select(Some(2)).unwrap();

        session.apply(&Mutation::Move { index: 1, offset: 1 }).unwrap();

        assert_eq!(session.selection(), Some(1));
    }

    #[test]
    fn test_removing_selected_block_selects_previous() {
        let mut session = session();
        session.select(Some(2)).unwrap();
        let id = session.selected_block().unwrap().id.clone();

        session.apply(&Mutation::Remove { id }).unwrap();

        assert_eq!(session.selection(), Some(1));
    }

    #[test]
    fn test_removing_earlier_block_shifts_selection() {
        let mut session = session();
        session.select(Some(3)).unwrap();
        let selected_id = session.selected_block().unwrap().id.clone();
        let first = session.document().get(0).unwrap().id.clone();

        session.apply(&Mutation::Remove { id: first }).unwrap();

        assert_eq!(session.selection(), Some(2));
        assert_eq!(session.selected_block().unwrap().id, selected_id);
    }

    #[test]
    fn test_removing_last_remaining_block_clears_selection() {
        let mut session = EditSession::new("solo", Document::new());
        session.apply(&Mutation::Insert { kind: BlockKind::Footer }).unwrap();
        let id = session.selected_block().unwrap().id.clone();

        session.apply(&Mutation::Remove { id }).unwrap();

        assert_eq!(session.selection(), None);
        assert!(session.document().is_empty());
    }

    #[test]
    fn test_noop_edits_are_not_recorded() {
        let mut session = session();
        let effect = session
            .apply(&Mutation::Move { index: 0, offset: -1 })
            .unwrap();

        assert_eq!(effect, EditEffect::Unchanged);
        assert_eq!(session.version(), 0);
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_failed_edit_keeps_state() {
        let mut session = session();
        let before = session.document().clone();

        let result = session.apply(&Mutation::Update {
            id: "missing".into(),
            attributes: Attributes::new().with("text", "x"),
        });

        assert!(matches!(result, Err(EditorError::Mutation(_))));
        assert_eq!(session.document(), &before);
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_undo_redo_restores_documents() {
        let mut session = session();
        let original = session.document().clone();

        session.apply(&Mutation::Duplicate { index: 4 }).unwrap();
        assert_eq!(session.selection(), Some(5));
        let edited = session.document().clone();

        assert!(session.undo());
        assert_eq!(session.document(), &original);
        assert_eq!(session.selection(), Some(4), "selection is clamped");

        assert!(session.redo());
        assert_eq!(session.document(), &edited);
        assert!(!session.redo());
    }

    #[test]
    fn test_batch_undoes_as_one_step() {
        let mut session = session();
        let original = session.document().clone();

        session.begin_batch("Add call to action");
        session.apply(&Mutation::Insert { kind: BlockKind::Heading }).unwrap();
        session.apply(&Mutation::Insert { kind: BlockKind::Button }).unwrap();
        session.end_batch();

        assert_eq!(session.history().undo_levels(), 1);
        assert!(session.undo());
        assert_eq!(session.document(), &original);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut session = session();
        let result = session.select(Some(9));

        assert!(matches!(
            result,
            Err(EditorError::InvalidSelection { index: 9, len: 5 })
        ));
        session.select(None).unwrap();
        assert_eq!(session.selection(), None);
    }
}
