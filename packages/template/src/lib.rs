//! # Mailblocks Template
//!
//! The boundary object handed to persistence and sending: a document
//! together with the HTML compiled from it and the variables that HTML
//! references.
//!
//! ```rust
//! use mailblocks_model::{Attributes, BlockKind, Document};
//! use mailblocks_template::finalize;
//!
//! let mut doc = Document::new();
//! doc.push_with(BlockKind::Paragraph, Attributes::new().with("text", "Hi {{name}}"));
//!
//! let finalized = finalize(&doc);
//! assert_eq!(finalized.variables[0].name, "name");
//! ```

mod finalize;
mod record;
mod store;

pub use finalize::{compile, finalize, finalize_record, finalize_with, CompiledTemplate, FinalizedTemplate};
pub use record::{TemplateMetadata, TemplateRecord};
pub use store::{validate_name, FsStore, MemoryStore, StoreError, TemplateStore};

pub use mailblocks_compiler_html::CompileOptions;
