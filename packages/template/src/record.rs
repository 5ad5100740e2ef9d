use mailblocks_model::Document;
use serde::{Deserialize, Serialize};

/// Descriptive fields stored next to a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    /// Unique within a store; also the file stem for file-backed stores
    pub name: String,

    /// Subject line; may contain `{{variables}}`
    #[serde(default)]
    pub subject: String,

    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

impl TemplateMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: String::new(),
            category: default_category(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Editable source of a template: metadata plus the block document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    #[serde(flatten)]
    pub metadata: TemplateMetadata,
    pub document: Document,
}

impl TemplateRecord {
    pub fn new(metadata: TemplateMetadata, document: Document) -> Self {
        Self { metadata, document }
    }

    /// A fresh record holding the starter layout
    pub fn starter(name: impl Into<String>) -> Self {
        Self::new(TemplateMetadata::new(name), Document::starter())
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
