//! Authoring checks for block documents.
//!
//! The linter never blocks compilation; it points out blocks that will
//! render, but probably not the way the author intended.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use linter::{lint_document, LintOptions};
pub use rules::{
    ButtonUrlRule, EmptyListRule, ImageAltRule, LintRule, MalformedPlaceholderRule, RuleRegistry,
};
