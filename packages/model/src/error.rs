//! Error types for loading documents

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(String),

    #[error("Unknown block type '{kind}' on block {id}")]
    UnknownBlockKind { id: String, kind: String },
}
