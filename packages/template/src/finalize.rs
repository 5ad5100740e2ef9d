//! Composition of rendering and variable extraction.
//!
//! This is the only place the two are combined. HTML is recompiled from the
//! document on every call; nothing here caches.

use crate::record::{TemplateMetadata, TemplateRecord};
use mailblocks_compiler_html::{compile_to_html, CompileOptions};
use mailblocks_model::Document;
use mailblocks_variables::{extract_variables, extract_variables_from, Variable};
use serde::{Deserialize, Serialize};

/// HTML plus the variables it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledTemplate {
    pub html: String,
    pub variables: Vec<Variable>,
}

/// Everything persistence needs: the editable document for later, the HTML
/// for direct reuse and the variables for send-time substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TemplateMetadata>,
    pub document: Document,
    pub html: String,
    pub variables: Vec<Variable>,
}

impl FinalizedTemplate {
    pub fn compiled(&self) -> CompiledTemplate {
        CompiledTemplate {
            html: self.html.clone(),
            variables: self.variables.clone(),
        }
    }

    /// Variable names in order
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }
}

/// Compile `document` and extract the variables from the result
pub fn compile(document: &Document, options: &CompileOptions) -> CompiledTemplate {
    let html = compile_to_html(document, options);
    let variables = extract_variables(&html);
    CompiledTemplate { html, variables }
}

/// Finalize with default compile options
pub fn finalize(document: &Document) -> FinalizedTemplate {
    finalize_with(document, &CompileOptions::default())
}

pub fn finalize_with(document: &Document, options: &CompileOptions) -> FinalizedTemplate {
    let CompiledTemplate { html, variables } = compile(document, options);

    tracing::debug!(
        blocks = document.len(),
        variables = variables.len(),
        "finalized template"
    );
    FinalizedTemplate {
        metadata: None,
        document: document.clone(),
        html,
        variables,
    }
}

/// Finalize a stored record.
///
/// The subject becomes the HTML title. Variables used in the subject are
/// listed first, followed by those only found in the body.
pub fn finalize_record(record: &TemplateRecord, options: &CompileOptions) -> FinalizedTemplate {
    let subject = &record.metadata.subject;
    let mut options = options.clone();
    if !subject.trim().is_empty() {
        options.title = subject.clone();
    }

    let html = compile_to_html(&record.document, &options);
    let variables = extract_variables_from([subject.as_str(), html.as_str()]);

    tracing::debug!(
        template = %record.metadata.name,
        variables = variables.len(),
        "finalized template record"
    );
    FinalizedTemplate {
        metadata: Some(record.metadata.clone()),
        document: record.document.clone(),
        html,
        variables,
    }
}
