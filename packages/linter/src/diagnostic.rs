use mailblocks_model::{Block, BlockId};
use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DiagnosticLevel::Error => "error",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Info => "info",
        })
    }
}

/// A diagnostic message from the linter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Block the issue was found in
    pub block_id: BlockId,

    /// Position of that block in the document
    pub index: usize,

    /// Optional suggestion for fixing the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    fn new(
        level: DiagnosticLevel,
        rule: impl Into<String>,
        message: impl Into<String>,
        index: usize,
        block: &Block,
    ) -> Self {
        Self {
            level,
            rule: rule.into(),
            message: message.into(),
            block_id: block.id.clone(),
            index,
            suggestion: None,
        }
    }

    pub fn error(rule: impl Into<String>, message: impl Into<String>, index: usize, block: &Block) -> Self {
        Self::new(DiagnosticLevel::Error, rule, message, index, block)
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, index: usize, block: &Block) -> Self {
        Self::new(DiagnosticLevel::Warning, rule, message, index, block)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>, index: usize, block: &Block) -> Self {
        Self::new(DiagnosticLevel::Info, rule, message, index, block)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
