//! # htmltomd
//!
//! HTML to Markdown conversion for Rust.
//!
//! This library converts HTML pages into Markdown documents. It understands
//! a few HTML dialects that differ in where the title and content live and
//! in the constructs they use: generic HTML pages, Confluence page exports
//! and Google Docs exports.
//!
//! ## Quick Start
//!
//! ```
//! use htmltomd::{to_markdown, ConvertOptions, Dialect};
//!
//! let html = r#"
//!     <html>
//!         <head><title>Release Notes</title></head>
//!         <body>
//!             <h1>Highlights</h1>
//!             <p>Faster <strong>builds</strong>.</p>
//!             <ul><li>One</li><li>Two</li></ul>
//!         </body>
//!     </html>"#;
//!
//! let options = ConvertOptions::new().with_dialect(Dialect::Html);
//! let markdown = to_markdown(html, &options);
//! assert_eq!(
//!     markdown,
//!     "# Release Notes\n\n## Highlights\n\nFaster **builds**.\n\n* One\n* Two"
//! );
//! ```
//!
//! ## Features
//!
//! - **Dialects**: generic HTML, Confluence (panels, highlighted code blocks),
//!   Google Docs (page breaks)
//! - **Inline rewriting**: bold, italic, links, inline code and images
//! - **Structure preservation**: headers, paragraphs, lists, tables, code blocks
//! - **Hugo output**: figure and notice shortcodes
//! - **Customizable**: every lookup step of a dialect can be overridden

pub mod convert;
pub mod dom;
pub mod error;
pub mod model;
pub mod transform;

// Re-export commonly used types
pub use convert::{
    ConfluenceSelectionConverter, ConvertOptions, Dialect, DocumentConverter,
    GoogleSelectionConverter, HtmlSelectionConverter, OutputStyle, SelectionConverter,
    SelectionConverterConfig,
};
pub use dom::{Element, Html};
pub use error::{Error, Result};
pub use model::{Block, CodeBlock, Doc, DocConfig, Header, List, ListKind, Table};
pub use transform::{TextCleaner, Transformer};

use std::io::Read;

/// Parse an HTML document.
///
/// Parsing never fails: malformed markup is repaired the way a browser
/// would repair it.
///
/// # Example
///
/// ```
/// use htmltomd::parse_html;
///
/// let html = parse_html("<p>Hello</p>");
/// assert!(html.find_first_tag("body").is_some());
/// ```
pub fn parse_html(html: &str) -> Html {
    Html::parse(html)
}

/// Parse an HTML document from a reader.
///
/// # Example
///
/// ```no_run
/// use htmltomd::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("page.html").unwrap();
/// let html = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Html> {
    Html::from_reader(reader)
}

/// Convert an HTML string to Markdown.
///
/// # Example
///
/// ```
/// use htmltomd::{to_markdown, ConvertOptions, Dialect};
///
/// let options = ConvertOptions::new().with_dialect(Dialect::Confluence);
/// let markdown = to_markdown(
///     r#"<span id="title-text">Page</span><div id="main-content"><p>Body</p></div>"#,
///     &options,
/// );
/// assert_eq!(markdown, "# Page\n\nBody");
/// ```
pub fn to_markdown(html: &str, options: &ConvertOptions) -> String {
    DocumentConverter::from_options(options).convert_str(html)
}

/// Convert HTML read from `reader` to Markdown.
///
/// # Example
///
/// ```no_run
/// use htmltomd::{to_markdown_from_reader, ConvertOptions};
/// use std::fs::File;
///
/// let file = File::open("page.html").unwrap();
/// let markdown = to_markdown_from_reader(file, &ConvertOptions::default()).unwrap();
/// std::fs::write("page.md", markdown).unwrap();
/// ```
pub fn to_markdown_from_reader<R: Read>(reader: R, options: &ConvertOptions) -> Result<String> {
    DocumentConverter::from_options(options).convert_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_to_markdown_defaults() {
        let markdown = to_markdown("<h2>Header</h2><p>Text</p>", &ConvertOptions::default());
        assert_eq!(markdown, "### Header\n\nText");
    }

    #[test]
    fn test_to_markdown_empty_input() {
        assert_eq!(to_markdown("", &ConvertOptions::default()), "");
    }

    #[test]
    fn test_to_markdown_ascii_only() {
        let options = ConvertOptions::new().with_ascii_only(true);
        assert_eq!(to_markdown("<p>Caf\u{e9} \u{201C}ok\u{201D}</p>", &options), "Caf \"ok\"");
    }

    #[test]
    fn test_to_markdown_from_reader() {
        let reader = Cursor::new(b"<title>T</title><p>Body</p>".to_vec());
        let markdown = to_markdown_from_reader(reader, &ConvertOptions::default()).unwrap();
        assert_eq!(markdown, "# T\n\nBody");
    }

    #[test]
    fn test_reader_error_propagates() {
        let result = to_markdown_from_reader(FailingReader, &ConvertOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_reader() {
        let html = parse_reader(Cursor::new(b"<p id=\"x\">y</p>".to_vec())).unwrap();
        assert_eq!(html.find_by_id("x").unwrap().text(), "y");
    }
}
