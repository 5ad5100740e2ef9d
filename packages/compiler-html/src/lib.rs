//! # Mailblocks HTML Compiler
//!
//! Compiles a [`Document`](mailblocks_model::Document) into one
//! self-contained, table-based HTML email.
//!
//! Compilation is deterministic and total: the same document always yields
//! the same bytes, and missing or malformed attributes fall back to defaults
//! instead of failing.

mod blocks;
mod compiler;

pub use compiler::{compile_to_html, render, CompileOptions, EdgePosition};
