//! Renderable content blocks.

use super::{Doc, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One renderable unit of a markdown document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Block {
    /// Section header
    Header(Header),
    /// Block of text
    Paragraph(String),
    /// Ordered or unordered list
    List(List),
    /// Pipe table
    Table(Table),
    /// Fenced code block
    CodeBlock(CodeBlock),
    /// `---`
    HorizontalRule,
    /// Nested document, rendered with its own separator
    Doc(Doc),
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Header(h) => h.fmt(f),
            Block::Paragraph(text) => f.write_str(text),
            Block::List(l) => l.fmt(f),
            Block::Table(t) => t.fmt(f),
            Block::CodeBlock(cb) => cb.fmt(f),
            Block::HorizontalRule => f.write_str("---"),
            Block::Doc(doc) => doc.fmt(f),
        }
    }
}

impl From<Header> for Block {
    fn from(header: Header) -> Self {
        Block::Header(header)
    }
}

impl From<List> for Block {
    fn from(list: List) -> Self {
        Block::List(list)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

impl From<CodeBlock> for Block {
    fn from(code: CodeBlock) -> Self {
        Block::CodeBlock(code)
    }
}

impl From<Doc> for Block {
    fn from(doc: Doc) -> Self {
        Block::Doc(doc)
    }
}

/// A markdown header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header level (1-6)
    pub level: u8,

    /// Header text
    pub text: String,
}

impl Header {
    /// Create a header; the level is clamped to 1-6.
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Level of an HTML heading tag (`h1`..`h6`).
    pub fn level_from_tag(tag: &str) -> Option<u8> {
        match tag {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level as usize), self.text)
    }
}

/// List flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `*` items
    #[default]
    Unordered,
    /// `1.` items (markdown renumbers them)
    Ordered,
}

impl ListKind {
    /// Prefix written before every item.
    pub fn ordinal(self) -> &'static str {
        match self {
            ListKind::Unordered => "*",
            ListKind::Ordered => "1.",
        }
    }
}

/// An ordered or unordered list of single-line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// List flavour
    pub kind: ListKind,

    /// Item texts
    pub items: Vec<String>,
}

impl List {
    /// Create an unordered list.
    pub fn unordered(items: Vec<String>) -> Self {
        Self {
            kind: ListKind::Unordered,
            items,
        }
    }

    /// Create an ordered list.
    pub fn ordered(items: Vec<String>) -> Self {
        Self {
            kind: ListKind::Ordered,
            items,
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordinal = self.kind.ordinal();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{} {}", ordinal, item.trim())?;
        }
        Ok(())
    }
}

/// Preformatted text such as source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language tag written after the opening fence
    pub lang: String,

    /// Code, written verbatim
    pub code: String,
}

impl CodeBlock {
    /// Create a code block.
    pub fn new(lang: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "```{}\n{}\n```", self.lang, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        vec!["item 1".to_string(), "item 2".to_string()]
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(List::unordered(items()).to_string(), "* item 1\n* item 2");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(List::ordered(items()).to_string(), "1. item 1\n1. item 2");
    }

    #[test]
    fn test_list_items_trimmed() {
        let list = List::unordered(vec!["  padded  ".to_string()]);
        assert_eq!(list.to_string(), "* padded");
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(List::ordered(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_headers() {
        assert_eq!(Header::new(1, "Title").to_string(), "# Title");
        assert_eq!(Header::new(3, "Title").to_string(), "### Title");
        assert_eq!(Header::new(6, "Title").to_string(), "###### Title");
        assert_eq!(Header::new(9, "Title").to_string(), "###### Title");
        assert_eq!(Header::new(0, "Title").to_string(), "# Title");
    }

    #[test]
    fn test_level_from_tag() {
        assert_eq!(Header::level_from_tag("h4"), Some(4));
        assert_eq!(Header::level_from_tag("h7"), None);
        assert_eq!(Header::level_from_tag("p"), None);
    }

    #[test]
    fn test_paragraph_keeps_newlines() {
        let p = Block::Paragraph("content\ncan contain\nnewlines".into());
        assert_eq!(p.to_string(), "content\ncan contain\nnewlines");
    }

    #[test]
    fn test_code_block() {
        let cb = CodeBlock::new("rust", "fn main() {\n    println!(\"Hello World\");\n}");
        assert_eq!(
            cb.to_string(),
            "```rust\nfn main() {\n    println!(\"Hello World\");\n}\n```"
        );
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(Block::HorizontalRule.to_string(), "---");
    }
}
