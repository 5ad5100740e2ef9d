use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use crate::rules::RuleRegistry;
use mailblocks_model::Document;

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,

    /// Drop diagnostics less severe than this
    pub min_level: Option<DiagnosticLevel>,
}

/// Lint a document and return diagnostics in block order
pub fn lint_document(document: &Document, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for (index, block) in document.blocks().iter().enumerate() {
        for rule in registry.rules() {
            diagnostics.extend(rule.check_block(index, block));
        }
    }

    if let Some(min_level) = options.min_level {
        diagnostics.retain(|d| d.level <= min_level);
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ImageAltRule, LintRule};
    use mailblocks_model::{Attributes, Block, BlockKind};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.push_with(BlockKind::Heading, Attributes::new().with("text", "Hi {{ name }}"));
        doc.push_with(BlockKind::Image, Attributes::new().with("url", "hero.png"));
        doc.push_with(
            BlockKind::Button,
            Attributes::new().with("text", "Go").with("url", "{{buttonLink}}"),
        );
        doc.push_with(BlockKind::List, Attributes::new());
        doc
    }

    #[test]
    fn test_default_rules_in_block_order() {
        let diagnostics = lint_document(&sample(), LintOptions::default());
        let found: Vec<(usize, &str)> = diagnostics
            .iter()
            .map(|d| (d.index, d.rule.as_str()))
            .collect();

        assert_eq!(
            found,
            vec![
                (0, "malformed-placeholder"),
                (1, "image-alt"),
                (3, "empty-list"),
            ]
        );
    }

    #[test]
    fn test_starter_document_only_flags_button() {
        let diagnostics = lint_document(&Document::starter(), LintOptions::default());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "button-url");
    }

    #[test]
    fn test_min_level_filters() {
        let options = LintOptions {
            min_level: Some(DiagnosticLevel::Error),
            ..Default::default()
        };
        let diagnostics = lint_document(&sample(), options);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "image-alt");
    }

    #[test]
    fn test_custom_registry() {
        struct NoSpacers;

        impl LintRule for NoSpacers {
            fn name(&self) -> &'static str {
                "no-spacers"
            }

            fn description(&self) -> &'static str {
                "Spacers are not allowed"
            }

            fn check_block(&self, index: usize, block: &Block) -> Vec<Diagnostic> {
                if block.kind == BlockKind::Spacer {
                    vec![Diagnostic::info(self.name(), "Spacer found", index, block)]
                } else {
                    Vec::new()
                }
            }
        }

        let mut registry = RuleRegistry::empty();
        registry.add_rule(Box::new(NoSpacers));
        registry.add_rule(Box::new(ImageAltRule));
        assert!(registry.disable("image-alt"));
        assert!(!registry.disable("image-alt"));

        let mut doc = sample();
        doc.push(BlockKind::Spacer);

        let diagnostics = lint_document(
            &doc,
            LintOptions {
                registry: Some(registry),
                ..Default::default()
            },
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Info);
        assert_eq!(diagnostics[0].index, 4);
    }

    #[test]
    fn test_diagnostic_json() {
        let diagnostics = lint_document(&Document::starter(), LintOptions::default());
        let json = serde_json::to_value(&diagnostics[0]).unwrap();

        assert_eq!(json["level"], "warning");
        assert_eq!(json["rule"], "button-url");
        assert_eq!(json["index"], 2);
        assert!(json["blockId"].is_string());
    }
}
