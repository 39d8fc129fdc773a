//! Markdown document model.
//!
//! A [`Doc`] is an ordered list of typed [`Block`]s plus the configuration
//! used to render them. Blocks know how to render themselves; the document
//! joins them with its separator and prepends the title when one is set.
//! Nested containers (e.g. `<div>`) become nested documents so that their
//! blocks render as one unit.

mod block;
mod document;
mod table;

pub use block::{Block, CodeBlock, Header, List, ListKind};
pub use document::{Doc, DocConfig, DEFAULT_SEPARATOR};
pub use table::Table;
