//! # Edit Operations
//!
//! Pure functions over [`Document`]: each takes the current document and
//! returns a new one, never touching its input. Keeping the old value around
//! is all an undo history needs.
//!
//! Every operation also reports an [`EditEffect`] describing what moved, so
//! the owning session can re-derive its selection.

use crate::mutations::MutationError;
use mailblocks_model::{Attributes, BlockId, BlockKind, Document, ThemeParameters};
use serde::{Deserialize, Serialize};

/// What an edit did to the block sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum EditEffect {
    Inserted { index: usize, id: BlockId },
    Updated { index: usize, id: BlockId },
    Moved { from: usize, to: usize },
    Duplicated { source: usize, index: usize, id: BlockId },
    Removed { index: usize, id: BlockId },
    ThemeChanged,
    /// The document came back equal to the input
    Unchanged,
}

/// Result of an edit: the new document plus what changed
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub document: Document,
    pub effect: EditEffect,
}

impl EditOutcome {
    fn unchanged(doc: &Document) -> Self {
        Self {
            document: doc.clone(),
            effect: EditEffect::Unchanged,
        }
    }
}

/// Append a block of `kind` with its default attributes
pub fn insert(doc: &Document, kind: BlockKind) -> EditOutcome {
    let mut document = doc.clone();
    let id = document.push(kind);
    let index = document.len() - 1;

    tracing::debug!(%kind, %id, index, "inserted block");
    EditOutcome {
        document,
        effect: EditEffect::Inserted { index, id },
    }
}

/// Shallow-merge `partial` into a block's attributes.
///
/// Provided keys overwrite, other keys are kept, list values are replaced
/// whole. A missing block is an error: callers holding ids should never have
/// stale ones.
pub fn update(doc: &Document, id: &BlockId, partial: &Attributes) -> Result<EditOutcome, MutationError> {
    let index = doc
        .index_of(id)
        .ok_or_else(|| MutationError::BlockNotFound(id.clone()))?;

    let mut document = doc.clone();
    if let Some(attributes) = document.attributes_mut(id) {
        attributes.merge(partial);
    }

    tracing::debug!(%id, index, keys = partial.len(), "updated block");
    Ok(EditOutcome {
        document,
        effect: EditEffect::Updated { index, id: id.clone() },
    })
}

/// Swap the block at `index` with the one at `index + offset`.
///
/// Out-of-range targets are a no-op, not an error: editors disable the
/// move controls at either end of the list.
pub fn move_block(doc: &Document, index: usize, offset: isize) -> EditOutcome {
    let target = match index.checked_add_signed(offset) {
        Some(target) if offset != 0 && index < doc.len() && target < doc.len() => target,
        _ => {
            tracing::debug!(index, offset, len = doc.len(), "move out of range, ignoring");
            return EditOutcome::unchanged(doc);
        }
    };

    let mut document = doc.clone();
    document.swap(index, target);

    tracing::debug!(from = index, to = target, "moved block");
    EditOutcome {
        document,
        effect: EditEffect::Moved { from: index, to: target },
    }
}

/// Insert a copy of the block at `index` directly after it, under a new id
pub fn duplicate(doc: &Document, index: usize) -> Result<EditOutcome, MutationError> {
    let source = doc.get(index).ok_or(MutationError::IndexOutOfBounds {
        index,
        len: doc.len(),
    })?;

    let mut document = doc.clone();
    let id = document.insert_copy(index + 1, source);

    tracing::debug!(source = %source.id, copy = %id, "duplicated block");
    Ok(EditOutcome {
        document,
        effect: EditEffect::Duplicated {
            source: index,
            index: index + 1,
            id,
        },
    })
}

/// Remove the block with `id`; a missing block is a no-op
pub fn remove(doc: &Document, id: &BlockId) -> EditOutcome {
    let mut document = doc.clone();
    match document.remove(id) {
        Some((index, block)) => {
            tracing::debug!(%id, index, kind = %block.kind, "removed block");
            EditOutcome {
                document,
                effect: EditEffect::Removed { index, id: id.clone() },
            }
        }
        None => {
            tracing::warn!(%id, "remove addressed a missing block");
            EditOutcome::unchanged(doc)
        }
    }
}

/// Replace the theme; width and radius are clamped into range
pub fn set_theme(doc: &Document, theme: ThemeParameters) -> EditOutcome {
    let mut document = doc.clone();
    document.set_theme(theme);

    if document.theme() == doc.theme() {
        return EditOutcome::unchanged(doc);
    }

    tracing::debug!("theme changed");
    EditOutcome {
        document,
        effect: EditEffect::ThemeChanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_blocks() -> Document {
        let mut doc = Document::new();
        doc.push(BlockKind::Header);
        doc.push(BlockKind::Paragraph);
        doc.push(BlockKind::Footer);
        doc
    }

    fn kinds(doc: &Document) -> Vec<BlockKind> {
        doc.blocks().iter().map(|b| b.kind).collect()
    }

    #[test]
    fn test_insert_appends_with_defaults() {
        let doc = three_blocks();
        let outcome = insert(&doc, BlockKind::Button);

        assert_eq!(outcome.document.len(), 4);
        assert_eq!(doc.len(), 3, "input must be untouched");

        let added = outcome.document.get(3).unwrap();
        assert_eq!(added.kind, BlockKind::Button);
        assert_eq!(added.attributes, mailblocks_model::default_attributes(BlockKind::Button));
        assert_eq!(
            outcome.effect,
            EditEffect::Inserted {
                index: 3,
                id: added.id.clone()
            }
        );
    }

    #[test]
    fn test_update_merges_shallowly() {
        let doc = three_blocks();
        let id = doc.get(1).unwrap().id.clone();

        let outcome = update(&doc, &id, &Attributes::new().with("text", "Hello {{name}}")).unwrap();
        let attrs = &outcome.document.get(1).unwrap().attributes;

        assert_eq!(attrs.text("text").as_deref(), Some("Hello {{name}}"));
        assert_eq!(attrs.number("fontSize"), Some(16.0));
        assert_eq!(outcome.effect, EditEffect::Updated { index: 1, id });
    }

    #[test]
    fn test_update_missing_block_is_not_found() {
        let doc = three_blocks();
        let missing = BlockId::from("nope");

        assert_eq!(
            update(&doc, &missing, &Attributes::new()),
            Err(MutationError::BlockNotFound(missing))
        );
    }

    #[test]
    fn test_move_swaps_neighbours() {
        let doc = three_blocks();
        let outcome = move_block(&doc, 0, 1);

        assert_eq!(
            kinds(&outcome.document),
            vec![BlockKind::Paragraph, BlockKind::Header, BlockKind::Footer]
        );
        assert_eq!(outcome.effect, EditEffect::Moved { from: 0, to: 1 });
    }

    #[test]
    fn test_move_at_boundaries_is_noop() {
        let doc = three_blocks();

        let up = move_block(&doc, 0, -1);
        assert_eq!(up.document, doc);
        assert_eq!(up.effect, EditEffect::Unchanged);

        let down = move_block(&doc, 2, 1);
        assert_eq!(down.document, doc);
        assert_eq!(down.effect, EditEffect::Unchanged);

        assert_eq!(move_block(&doc, 7, -1).document, doc);
        assert_eq!(move_block(&doc, 1, 0).effect, EditEffect::Unchanged);
    }

    #[test]
    fn test_duplicate_inserts_after_with_new_id() {
        let doc = three_blocks();
        let outcome = duplicate(&doc, 1).unwrap();
        let copy = outcome.document.get(2).unwrap();

        assert_eq!(outcome.document.len(), 4);
        assert_eq!(copy.kind, BlockKind::Paragraph);
        assert_eq!(copy.attributes, doc.get(1).unwrap().attributes);
        assert!(doc.blocks().iter().all(|b| b.id != copy.id));
        assert_eq!(outcome.document.get(3).unwrap().kind, BlockKind::Footer);
    }

    #[test]
    fn test_duplicate_out_of_bounds() {
        let doc = three_blocks();
        assert_eq!(
            duplicate(&doc, 3),
            Err(MutationError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_remove() {
        let doc = three_blocks();
        let id = doc.get(0).unwrap().id.clone();
        let outcome = remove(&doc, &id);

        assert_eq!(kinds(&outcome.document), vec![BlockKind::Paragraph, BlockKind::Footer]);
        assert_eq!(outcome.effect, EditEffect::Removed { index: 0, id });
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let doc = three_blocks();
        let outcome = remove(&doc, &BlockId::from("ghost"));

        assert_eq!(outcome.document, doc);
        assert_eq!(outcome.effect, EditEffect::Unchanged);
    }

    #[test]
    fn test_set_theme_clamps() {
        let doc = three_blocks();
        let outcome = set_theme(
            &doc,
            ThemeParameters {
                content_width: 2000,
                ..Default::default()
            },
        );

        assert_eq!(outcome.document.theme().content_width, 700);
        assert_eq!(outcome.effect, EditEffect::ThemeChanged);
        assert_eq!(set_theme(&doc, ThemeParameters::default()).effect, EditEffect::Unchanged);
    }
}
