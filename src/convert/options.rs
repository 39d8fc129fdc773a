//! Conversion options and configuration.

use crate::error::{Error, Result};
use crate::model::{DocConfig, DEFAULT_SEPARATOR};
use crate::transform::TextCleaner;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source HTML convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Generic HTML page
    #[default]
    Html,

    /// Confluence page export
    Confluence,

    /// Google Docs HTML export
    Google,
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Dialect; 3] = [Dialect::Html, Dialect::Confluence, Dialect::Google];

    /// Name used on the command line and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Html => "html",
            Dialect::Confluence => "confluence",
            Dialect::Google => "google",
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Dialect::Html),
            "confluence" => Ok(Dialect::Confluence),
            "google" => Ok(Dialect::Google),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markdown flavor to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputStyle {
    /// Plain markdown
    #[default]
    #[serde(rename = "md")]
    Markdown,

    /// Markdown with Hugo shortcodes for images and notices
    #[serde(rename = "hugo")]
    Hugo,
}

impl OutputStyle {
    /// Name used on the command line and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputStyle::Markdown => "md",
            OutputStyle::Hugo => "hugo",
        }
    }
}

impl FromStr for OutputStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "md" => Ok(OutputStyle::Markdown),
            "hugo" => Ok(OutputStyle::Hugo),
            _ => Err(Error::UnknownOutputStyle(s.to_string())),
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Source HTML convention
    pub dialect: Dialect,

    /// Markdown flavor
    pub output_style: OutputStyle,

    /// Strip non-ASCII characters from extracted text
    pub ascii_only: bool,

    /// Shift headers one level down to leave level 1 to the title
    pub reduce_headers: bool,

    /// Text placed between rendered blocks
    pub separator: String,
}

impl ConvertOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the output style.
    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }

    /// Enable or disable ASCII-only text.
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
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

    /// Text cleaner matching these options.
    pub fn cleaner(&self) -> TextCleaner {
        TextCleaner::new().with_ascii_only(self.ascii_only)
    }

    /// Top-level document configuration (no title).
    pub fn doc_config(&self) -> DocConfig {
        DocConfig::new()
            .with_reduce_headers(self.reduce_headers)
            .with_separator(self.separator.clone())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            output_style: OutputStyle::default(),
            ascii_only: false,
            reduce_headers: true,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
