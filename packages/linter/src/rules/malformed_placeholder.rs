use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use mailblocks_model::Block;
use regex::Regex;
use std::sync::OnceLock;

/// Flags `{{...}}` tokens the variable extractor will skip, such as
/// `{{ name }}` or `{{first-name}}`
pub struct MalformedPlaceholderRule;

fn braced_token_regex() -> &'static Regex {
    static BRACED: OnceLock<Regex> = OnceLock::new();
    BRACED.get_or_init(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("Invalid braced token regex"))
}

fn is_identifier(inner: &str) -> bool {
    !inner.is_empty() && inner.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `first-name` → `firstName`, ` name ` → `name`
fn suggest_identifier(inner: &str) -> Option<String> {
    let mut parts = inner
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|part| !part.is_empty());

    let mut ident = parts.next()?.to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            ident.extend(first.to_uppercase());
            ident.push_str(chars.as_str());
        }
    }
    Some(ident)
}

impl LintRule for MalformedPlaceholderRule {
    fn name(&self) -> &'static str {
        "malformed-placeholder"
    }

    fn description(&self) -> &'static str {
        "Detect placeholder tokens that will not be recognised as variables"
    }

    fn check_block(&self, index: usize, block: &Block) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for text in block.attributes.strings() {
            for captures in braced_token_regex().captures_iter(text) {
                let inner = &captures[1];
                if is_identifier(inner) {
                    continue;
                }

                let mut diagnostic = Diagnostic::warning(
                    self.name(),
                    format!("'{}' is not a valid placeholder and will be sent as-is", &captures[0]),
                    index,
                    block,
                );
                if let Some(ident) = suggest_identifier(inner) {
                    diagnostic = diagnostic.with_suggestion(format!("Use {{{{{ident}}}}}"));
                }
                diagnostics.push(diagnostic);
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblocks_model::{Attributes, BlockId, BlockKind};

    fn paragraph(text: &str) -> Block {
        Block::with_attributes(
            BlockId::from("p"),
            BlockKind::Paragraph,
            Attributes::new().with("text", text),
        )
    }

    #[test]
    fn test_spaced_placeholder() {
        let diagnostics = MalformedPlaceholderRule.check_block(0, &paragraph("Hi {{ name }}"));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].suggestion.as_deref(), Some("Use {{name}}"));
    }

    #[test]
    fn test_hyphenated_placeholder() {
        let diagnostics = MalformedPlaceholderRule.check_block(0, &paragraph("{{first-name}}"));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].suggestion.as_deref(), Some("Use {{firstName}}"));
    }

    #[test]
    fn test_empty_braces_have_no_suggestion() {
        let diagnostics = MalformedPlaceholderRule.check_block(0, &paragraph("{{}}"));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].suggestion.is_none());
    }

    #[test]
    fn test_non_ascii_placeholder_flagged() {
        let diagnostics = MalformedPlaceholderRule.check_block(0, &paragraph("{{名前}} {{ok}}"));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].suggestion.is_none());
    }

    #[test]
    fn test_valid_placeholders_pass() {
        let block = paragraph("Hi {{name}}, order {{order_id}} ships {{date2}}");
        assert!(MalformedPlaceholderRule.check_block(0, &block).is_empty());
    }

    #[test]
    fn test_list_items_checked() {
        let block = Block::with_attributes(
            BlockId::from("l"),
            BlockKind::List,
            Attributes::new().with("items", vec!["{{ok}}", "{{not ok}}"]),
        );

        let diagnostics = MalformedPlaceholderRule.check_block(4, &block);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].suggestion.as_deref(), Some("Use {{notOk}}"));
    }
}
