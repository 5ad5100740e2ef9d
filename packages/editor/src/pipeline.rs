//! # Preview Pipeline
//!
//! Coordinates the edit → render loop for a live preview: Mutate → Compile.
//!
//! The Pipeline manages:
//! - Applying mutations through an [`EditSession`]
//! - Recompiling HTML only when the document changed
//! - Annotated output so preview clicks map back to blocks

use crate::operations::EditEffect;
use crate::{EditSession, EditorError, Mutation};
use mailblocks_compiler_html::{compile_to_html, CompileOptions};
use mailblocks_model::Document;

/// Manages the full edit → render pipeline
pub struct PreviewPipeline {
    session: EditSession,
    options: CompileOptions,
    last_html: Option<String>,
}

/// Result of pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Session version after the edit
    pub version: u64,

    pub effect: EditEffect,

    /// Rendered preview for the new document
    pub html: String,
}

impl PreviewPipeline {
    /// Create pipeline for document
    pub fn new(document: Document) -> Self {
        let options = CompileOptions {
            annotate_blocks: true,
            ..CompileOptions::default()
        };
        Self::with_options(document, options)
    }

    pub fn with_options(document: Document, options: CompileOptions) -> Self {
        Self {
            session: EditSession::new("preview", document),
            options,
            last_html: None,
        }
    }

    /// Apply a mutation and return the fresh preview
    pub fn apply_mutation(&mut self, mutation: &Mutation) -> Result<PipelineResult, EditorError> {
        let effect = self.session.apply(mutation)?;
        if effect != EditEffect::Unchanged {
            self.last_html = None;
        }

        Ok(PipelineResult {
            version: self.session.version(),
            effect,
            html: self.html().to_string(),
        })
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.session.undo();
        if undone {
            self.last_html = None;
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.session.redo();
        if redone {
            self.last_html = None;
        }
        redone
    }

    /// Current preview, compiled on first use after a change
    pub fn html(&mut self) -> &str {
        let session = &self.session;
        let options = &self.options;
        self.last_html.get_or_insert_with(|| {
            tracing::trace!(version = session.version(), "recompiling preview");
            compile_to_html(session.document(), options)
        })
    }

    /// Whether a compiled preview is cached
    pub fn is_cached(&self) -> bool {
        self.last_html.is_some()
    }

    /// Clear the cache (force a full re-render on next access)
    pub fn clear_cache(&mut self) {
        self.last_html = None;
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        self.last_html = None;
        &mut self.session
    }

    pub fn document(&self) -> &Document {
        self.session.document()
    }
}
