use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use mailblocks_model::{Block, BlockKind};

/// Buttons need somewhere to go
pub struct ButtonUrlRule;

impl LintRule for ButtonUrlRule {
    fn name(&self) -> &'static str {
        "button-url"
    }

    fn description(&self) -> &'static str {
        "Warn about buttons without a link target"
    }

    fn check_block(&self, index: usize, block: &Block) -> Vec<Diagnostic> {
        if block.kind != BlockKind::Button {
            return Vec::new();
        }

        let url = block.attributes.text("url").unwrap_or_default();
        let url = url.trim();
        if !url.is_empty() && url != "#" {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            "Button does not link anywhere",
            index,
            block,
        )
        .with_suggestion("Set 'url' to a full link or a variable such as {{buttonLink}}")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblocks_model::{Attributes, BlockId};

    fn button(url: &str) -> Block {
        Block::with_attributes(
            BlockId::from("btn"),
            BlockKind::Button,
            Attributes::new().with("text", "Go").with("url", url),
        )
    }

    #[test]
    fn test_default_button_is_flagged() {
        let block = Block::new(BlockId::from("btn"), BlockKind::Button);
        let diagnostics = ButtonUrlRule.check_block(0, &block);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, crate::DiagnosticLevel::Warning);
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(ButtonUrlRule.check_block(0, &button(" ")).len(), 1);
    }

    #[test]
    fn test_real_url_and_variable_pass() {
        assert!(ButtonUrlRule.check_block(0, &button("https://example.com")).is_empty());
        assert!(ButtonUrlRule.check_block(0, &button("{{buttonLink}}")).is_empty());
    }
}
