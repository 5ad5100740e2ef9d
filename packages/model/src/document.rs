//! # Document
//!
//! The unit of truth for one email template: an ordered block list plus
//! theme parameters.
//!
//! Blocks can only be added through methods that issue a fresh id from the
//! document's [`IdGenerator`], so ids stay unique for the life of the
//! document. A block's kind is never exposed mutably.
//!
//! ## JSON shape
//!
//! ```json
//! {
//!   "blocks": [{ "id": "block-1", "type": "paragraph", "attributes": { "text": "Hi" } }],
//!   "theme": { "primaryColor": "#6366f1", "contentWidth": 600 }
//! }
//! ```

use crate::attributes::Attributes;
use crate::block::{Block, BlockId, BlockKind};
use crate::error::LoadError;
use crate::id_generator::IdGenerator;
use crate::theme::ThemeParameters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDocument")]
pub struct Document {
    blocks: Vec<Block>,
    theme: ThemeParameters,
    id_generator: IdGenerator,
}

impl Document {
    /// Empty document with the default theme
    pub fn new() -> Self {
        Self::with_theme(ThemeParameters::default())
    }

    pub fn with_theme(theme: ThemeParameters) -> Self {
        Self {
            blocks: Vec::new(),
            theme: theme.clamped(),
            id_generator: IdGenerator::new(),
        }
    }

    /// Default starter layout offered when a new template is created
    pub fn starter() -> Self {
        let mut doc = Self::new();
        for kind in [
            BlockKind::Header,
            BlockKind::Paragraph,
            BlockKind::Button,
            BlockKind::Divider,
            BlockKind::Footer,
        ] {
            doc.push(kind);
        }
        doc
    }

    /// Parse and validate a document from JSON
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        raw.try_into()
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_value(value)?;
        raw.try_into()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn theme(&self) -> &ThemeParameters {
        &self.theme
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    /// Append a block of `kind` with its default attributes
    pub fn push(&mut self, kind: BlockKind) -> BlockId {
        let id = self.next_id();
        self.blocks.push(Block::new(id.clone(), kind));
        id
    }

    /// Append a block of `kind` with the given attributes
    pub fn push_with(&mut self, kind: BlockKind, attributes: Attributes) -> BlockId {
        let id = self.next_id();
        self.blocks.push(Block::with_attributes(id.clone(), kind, attributes));
        id
    }

    /// Insert a copy of `source` at `index` under a freshly issued id.
    /// `index` is clamped to the end of the list.
    pub fn insert_copy(&mut self, index: usize, source: &Block) -> BlockId {
        let id = self.next_id();
        let index = index.min(self.blocks.len());
        self.blocks.insert(
            index,
            Block::with_attributes(id.clone(), source.kind, source.attributes.clone()),
        );
        id
    }

    pub fn attributes_mut(&mut self, id: &BlockId) -> Option<&mut Attributes> {
        self.blocks
            .iter_mut()
            .find(|b| &b.id == id)
            .map(|b| &mut b.attributes)
    }

    /// Swap two positions. Returns false (and changes nothing) when either is
    /// out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.blocks.len() || b >= self.blocks.len() {
            return false;
        }
        self.blocks.swap(a, b);
        true
    }

    /// Remove a block, returning its former position and the block itself
    pub fn remove(&mut self, id: &BlockId) -> Option<(usize, Block)> {
        let index = self.index_of(id)?;
        Some((index, self.blocks.remove(index)))
    }

    /// Replace the theme; width and radius are clamped to their ranges
    pub fn set_theme(&mut self, theme: ThemeParameters) {
        self.theme = theme.clamped();
    }

    pub fn id_generator(&self) -> &IdGenerator {
        &self.id_generator
    }

    /// Next generated id not held by any block
    fn next_id(&mut self) -> BlockId {
        loop {
            let id = self.id_generator.new_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated document as it appears on the wire
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    blocks: Vec<RawBlock>,
    #[serde(default)]
    theme: ThemeParameters,
    #[serde(default)]
    id_generator: Option<IdGenerator>,
}

#[derive(Deserialize)]
struct RawBlock {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    attributes: Attributes,
}

impl TryFrom<RawDocument> for Document {
    type Error = LoadError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let mut id_generator = raw.id_generator.unwrap_or_default();
        let mut seen = HashSet::new();
        let mut blocks = Vec::with_capacity(raw.blocks.len());

        for raw_block in raw.blocks {
            let kind: BlockKind = raw_block.kind.parse().map_err(|kind| LoadError::UnknownBlockKind {
                id: raw_block.id.clone(),
                kind,
            })?;

            if !seen.insert(raw_block.id.clone()) {
                return Err(LoadError::DuplicateBlockId(raw_block.id));
            }

            let id = BlockId::new(raw_block.id);
            id_generator.observe(&id);
            blocks.push(Block::with_attributes(id, kind, raw_block.attributes));
        }

        Ok(Self {
            blocks,
            theme: raw.theme.clamped(),
            id_generator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_issues_unique_ids() {
        let mut doc = Document::new();
        let a = doc.push(BlockKind::Heading);
        let b = doc.push(BlockKind::Heading);

        assert_ne!(a, b);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.index_of(&b), Some(1));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut doc = Document::new();
        let a = doc.push(BlockKind::Spacer);
        doc.remove(&a);
        let b = doc.push(BlockKind::Spacer);

        assert_ne!(a, b);
    }

    #[test]
    fn test_insert_copy_gets_fresh_id() {
        let mut doc = Document::new();
        let a = doc.push(BlockKind::Button);
        let source = doc.block(&a).unwrap().clone();

        let copy = doc.insert_copy(1, &source);

        assert_ne!(copy, a);
        assert_eq!(doc.get(1).unwrap().attributes, source.attributes);
    }

    #[test]
    fn test_swap_out_of_range_is_rejected() {
        let mut doc = Document::new();
        doc.push(BlockKind::Header);
        let before = doc.clone();

        assert!(!doc.swap(0, 1));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_starter_layout() {
        let doc = Document::starter();
        let kinds: Vec<_> = doc.blocks().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Header,
                BlockKind::Paragraph,
                BlockKind::Button,
                BlockKind::Divider,
                BlockKind::Footer
            ]
        );
    }

    #[test]
    fn test_json_round_trip_resumes_ids() {
        let mut doc = Document::starter();
        let json = doc.to_json_pretty().unwrap();
        let mut loaded = Document::from_json(&json).unwrap();

        assert_eq!(loaded, doc);
        assert_eq!(loaded.push(BlockKind::Spacer), doc.push(BlockKind::Spacer));
    }

    #[test]
    fn test_load_without_generator_never_collides() {
        let json = r#"{
            "blocks": [
                { "id": "block-4", "type": "paragraph", "attributes": { "text": "Hi" } },
                { "id": "block-2", "type": "spacer" }
            ]
        }"#;

        let mut doc = Document::from_json(json).unwrap();
        let id = doc.push(BlockKind::Footer);

        assert_eq!(id.as_str(), "block-5");
        assert_eq!(doc.theme(), &ThemeParameters::default());
    }

    #[test]
    fn test_exhausted_generator_skips_existing_ids() {
        let json = r#"{
            "blocks": [
                { "id": "block-18446744073709551615", "type": "spacer" },
                { "id": "block-0", "type": "divider" },
                { "id": "block-1", "type": "divider" }
            ]
        }"#;

        let mut doc = Document::from_json(json).unwrap();
        let first = doc.push(BlockKind::Footer);
        let second = doc.push(BlockKind::Footer);

        assert_eq!(first.as_str(), "block-2");
        assert_eq!(second.as_str(), "block-3");
        let ids: HashSet<_> = doc.blocks().iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids.len(), doc.len());
    }

    #[test]
    fn test_load_rejects_unknown_kind() {
        let json = r#"{ "blocks": [{ "id": "x", "type": "carousel" }] }"#;

        match Document::from_json(json) {
            Err(LoadError::UnknownBlockKind { id, kind }) => {
                assert_eq!(id, "x");
                assert_eq!(kind, "carousel");
            }
            other => panic!("expected UnknownBlockKind, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let json = r#"{ "blocks": [
            { "id": "x", "type": "spacer" },
            { "id": "x", "type": "divider" }
        ] }"#;

        assert!(matches!(
            Document::from_json(json),
            Err(LoadError::DuplicateBlockId(id)) if id == "x"
        ));
    }

    #[test]
    fn test_load_clamps_theme() {
        let json = r#"{ "blocks": [], "theme": { "contentWidth": 9000, "borderRadius": 99 } }"#;
        let doc = Document::from_json(json).unwrap();

        assert_eq!(doc.theme().content_width, 700);
        assert_eq!(doc.theme().border_radius, 24);
    }
}
