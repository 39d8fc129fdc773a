//! Document-level types.

use super::{Block, CodeBlock, Header, List, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between rendered blocks unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Configuration used to create a [`Doc`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocConfig {
    /// Document title, rendered as a level 1 header
    pub title: Option<String>,

    /// Shift every header one level down to leave level 1 to the title
    pub reduce_headers: bool,

    /// Text placed between rendered blocks
    pub separator: String,
}

impl DocConfig {
    /// Create a config with defaults (no title, reduced headers, blank-line separator).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable header reduction.
    pub fn with_reduce_headers(mut self, reduce: bool) -> Self {
        self.reduce_headers = reduce;
        self
    }

    /// Set the block separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Copy of the rendering settings without the title.
    ///
    /// Child documents are created from this so the title is only
    /// rendered once, by the top-level document.
    pub fn render_config(&self) -> Self {
        Self {
            title: None,
            reduce_headers: self.reduce_headers,
            separator: self.separator.clone(),
        }
    }
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            title: None,
            reduce_headers: true,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// A markdown document: an ordered list of blocks plus render settings.
///
/// Blocks are only ever appended. Empty paragraphs and headers are
/// dropped when added; blocks that render to an empty string are skipped
/// when the document is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    config: DocConfig,
    blocks: Vec<Block>,
}

impl Doc {
    /// Create an empty document.
    pub fn new(config: DocConfig) -> Self {
        Self {
            config,
            blocks: Vec::new(),
        }
    }

    /// Full configuration, including the title.
    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Configuration for child documents (no title).
    pub fn render_config(&self) -> DocConfig {
        self.config.render_config()
    }

    /// Blocks in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a block.
    pub fn add_block(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Append another document as a single block.
    pub fn add_doc(&mut self, doc: Doc) {
        self.blocks.push(Block::Doc(doc));
    }

    /// Append a header for an HTML heading level.
    ///
    /// Empty content is ignored. With `reduce_headers` the level is shifted
    /// down by one, never past 6.
    pub fn add_header(&mut self, level: u8, content: impl Into<String>) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        let level = level.clamp(1, 6);
        let level = if self.config.reduce_headers {
            (level + 1).min(6)
        } else {
            level
        };
        self.blocks.push(Block::Header(Header::new(level, content)));
    }

    /// Append a paragraph. Empty content is ignored.
    pub fn add_paragraph(&mut self, content: impl Into<String>) {
        let content = content.into();
        if !content.is_empty() {
            self.blocks.push(Block::Paragraph(content));
        }
    }

    /// Append an unordered list.
    pub fn add_unordered_list(&mut self, items: Vec<String>) {
        self.blocks.push(Block::List(List::unordered(items)));
    }

    /// Append an ordered list.
    pub fn add_ordered_list(&mut self, items: Vec<String>) {
        self.blocks.push(Block::List(List::ordered(items)));
    }

    /// Append a fenced code block.
    pub fn add_code_block(&mut self, lang: impl Into<String>, code: impl Into<String>) {
        self.blocks.push(Block::CodeBlock(CodeBlock::new(lang, code)));
    }

    /// Append a horizontal rule.
    pub fn add_horizontal_rule(&mut self) {
        self.blocks.push(Block::HorizontalRule);
    }

    /// Append a table.
    pub fn add_table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.blocks.push(Block::Table(Table::with_rows(headers, rows)));
    }

    /// Rendered title (`# Title`), or an empty string without a title.
    pub fn title(&self) -> String {
        match &self.config.title {
            Some(title) => format!("# {}", title),
            None => String::new(),
        }
    }

    /// Rendered blocks joined by the separator, without the title.
    pub fn content(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.to_string())
            .filter(|rendered| !rendered.is_empty())
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }

    /// Title and content joined by the separator.
    pub fn render(&self) -> String {
        let title = self.title();
        if title.is_empty() {
            self.content()
        } else {
            format!("{}{}{}", title, self.config.separator, self.content())
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
