//! # Mailblocks Model
//!
//! Document model for block-based email templates.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Block registry + Document            │
//! │  - Closed set of block kinds                │
//! │  - Default attributes per kind              │
//! │  - Theme parameters shared by all blocks    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: pure edit operations over Document  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: Document → HTML email        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! A [`Document`] is an ordered list of [`Block`]s plus [`ThemeParameters`].
//! Block order is vertical position in the rendered email. Block ids are
//! issued by the document's own [`IdGenerator`] and are never reissued, even
//! after the block they named has been removed.
//!
//! ## Usage
//!
//! ```rust
//! use mailblocks_model::{BlockKind, Document};
//!
//! let mut doc = Document::new();
//! let id = doc.push(BlockKind::Paragraph);
//! assert_eq!(doc.block(&id).unwrap().kind, BlockKind::Paragraph);
//! ```

mod attributes;
mod block;
mod document;
mod error;
mod id_generator;
mod registry;
mod theme;

pub use attributes::{format_number, AttributeValue, Attributes};
pub use block::{Block, BlockId, BlockKind};
pub use document::Document;
pub use error::LoadError;
pub use id_generator::IdGenerator;
pub use registry::{attribute_schema, default_attributes, AttributeSpec, AttributeType};
pub use theme::{ThemeParameters, BORDER_RADIUS_RANGE, CONTENT_WIDTH_RANGE};
