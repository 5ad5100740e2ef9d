//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Load error: {0}")]
    Load(#[from] mailblocks_model::LoadError),

    #[error("Selection {index} is out of range for {len} blocks")]
    InvalidSelection { index: usize, len: usize },
}
