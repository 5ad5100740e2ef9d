use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use mailblocks_model::{Block, BlockKind};

/// Lists without items render as an empty row
pub struct EmptyListRule;

impl LintRule for EmptyListRule {
    fn name(&self) -> &'static str {
        "empty-list"
    }

    fn description(&self) -> &'static str {
        "Warn about list blocks with no items"
    }

    fn check_block(&self, index: usize, block: &Block) -> Vec<Diagnostic> {
        if block.kind != BlockKind::List {
            return Vec::new();
        }

        let items = block.attributes.list("items").unwrap_or_default();
        if items.iter().any(|item| !item.trim().is_empty()) {
            return Vec::new();
        }

        vec![Diagnostic::warning(self.name(), "List has no items", index, block)
            .with_suggestion("Add items or remove the block")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblocks_model::{Attributes, BlockId};

    fn list(attributes: Attributes) -> Block {
        Block::with_attributes(BlockId::from("list"), BlockKind::List, attributes)
    }

    #[test]
    fn test_missing_and_blank_items() {
        assert_eq!(EmptyListRule.check_block(0, &list(Attributes::new())).len(), 1);

        let blank = Attributes::new().with("items", vec!["", "  "]);
        assert_eq!(EmptyListRule.check_block(0, &list(blank)).len(), 1);
    }

    #[test]
    fn test_default_list_passes() {
        let block = Block::new(BlockId::from("list"), BlockKind::List);
        assert!(EmptyListRule.check_block(0, &block).is_empty());
    }
}
