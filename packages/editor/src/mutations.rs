//! # Mutations
//!
//! Serializable edit intents. A [`Mutation`] is what an editing surface
//! sends; [`Mutation::apply`] routes it to the matching pure operation.
//!
//! ## Mutation Semantics
//!
//! ### Update
//! - Shallow merge, last write wins
//! - List values are replaced whole, never merged element-wise
//! - Fails with `BlockNotFound` for an unknown id
//!
//! ### Move
//! - Swaps with the neighbour at `index + offset`
//! - Out-of-range targets leave the document unchanged
//!
//! ### Duplicate
//! - Copy lands directly after the source with a fresh id
//! - Fails with `IndexOutOfBounds` for an unknown index
//!
//! ### Remove
//! - Unknown ids are a no-op

use crate::operations::{self, EditOutcome};
use mailblocks_model::{Attributes, BlockId, BlockKind, Document, ThemeParameters};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edit intents accepted by the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new block with default attributes
    Insert { kind: BlockKind },

    /// Merge attributes into a block
    Update { id: BlockId, attributes: Attributes },

    /// Swap a block with a neighbour
    Move { index: usize, offset: isize },

    /// Copy a block to just after itself
    Duplicate { index: usize },

    /// Delete a block
    Remove { id: BlockId },

    /// Replace the document theme
    SetTheme { theme: ThemeParameters },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Block index {index} out of bounds for {len} blocks")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl Mutation {
    /// Apply to `doc`, returning the edited copy. `doc` itself is untouched.
    pub fn apply(&self, doc: &Document) -> Result<EditOutcome, MutationError> {
        match self {
            Mutation::Insert { kind } => Ok(operations::insert(doc, *kind)),
            Mutation::Update { id, attributes } => operations::update(doc, id, attributes),
            Mutation::Move { index, offset } => Ok(operations::move_block(doc, *index, *offset)),
            Mutation::Duplicate { index } => operations::duplicate(doc, *index),
            Mutation::Remove { id } => Ok(operations::remove(doc, id)),
            Mutation::SetTheme { theme } => Ok(operations::set_theme(doc, theme.clone())),
        }
    }

    /// Get a debug name for this mutation
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Insert { .. } => "insert",
            Mutation::Update { .. } => "update",
            Mutation::Move { .. } => "move",
            Mutation::Duplicate { .. } => "duplicate",
            Mutation::Remove { .. } => "remove",
            Mutation::SetTheme { .. } => "setTheme",
        }
    }

    /// Short label for undo history
    pub fn describe(&self) -> String {
        match self {
            Mutation::Insert { kind } => format!("Add {}", kind.label()),
            Mutation::Update { id, .. } => format!("Edit {id}"),
            Mutation::Move { offset, .. } if *offset < 0 => "Move up".to_string(),
            Mutation::Move { .. } => "Move down".to_string(),
            Mutation::Duplicate { .. } => "Duplicate block".to_string(),
            Mutation::Remove { id } => format!("Delete {id}"),
            Mutation::SetTheme { .. } => "Change theme".to_string(),
        }
    }
}
