use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use mailblocks_model::{Block, BlockKind};

/// Images must carry alternative text
pub struct ImageAltRule;

impl LintRule for ImageAltRule {
    fn name(&self) -> &'static str {
        "image-alt"
    }

    fn description(&self) -> &'static str {
        "Require alt text on image blocks"
    }

    fn check_block(&self, index: usize, block: &Block) -> Vec<Diagnostic> {
        if block.kind != BlockKind::Image || block.attributes.non_empty_text("alt").is_some() {
            return Vec::new();
        }

        vec![Diagnostic::error(
            self.name(),
            "Images must have alternative text for screen readers and blocked-image views",
            index,
            block,
        )
        .with_suggestion("Set 'alt' to a short description of the image content")]
    }
}
