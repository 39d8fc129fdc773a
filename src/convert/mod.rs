//! Document conversion: HTML documents in, markdown documents out.
//!
//! The [`DocumentConverter`] owns the traversal. A dialect strategy
//! ([`SelectionConverter`]) tells it where the content root and the title
//! are and which elements carry content; each matched element is handed back
//! to the strategy, which may recurse into nested containers through a
//! callback.
//!
//! # Example
//!
//! ```
//! use htmltomd::convert::{ConvertOptions, Dialect, DocumentConverter};
//!
//! let options = ConvertOptions::new().with_dialect(Dialect::Google);
//! let converter = DocumentConverter::from_options(&options);
//!
//! let markdown = converter.convert_str("<head><title>Doc</title></head><p>Hello</p>");
//! assert_eq!(markdown, "# Doc\n\nHello");
//! ```

mod confluence;
mod google;
mod html;
mod options;
mod selection;

pub use confluence::{highlighter_language, ConfluenceSelectionConverter};
pub use google::GoogleSelectionConverter;
pub use html::HtmlSelectionConverter;
pub use options::{ConvertOptions, Dialect, OutputStyle};
pub use selection::{
    handle_element, ContentHandler, ContentSelector, RootFinder, SelectionConverter,
    SelectionConverterConfig, SelectionToMarkdown, TitleFinder, DEFAULT_CONTENT_TAGS,
};

use crate::dom::{Element, Html};
use crate::error::Result;
use crate::model::{Doc, DocConfig};
use crate::transform::{TextCleaner, Transformer};
use std::fmt;
use std::io::Read;

/// Containers nested deeper than this are not converted block by block;
/// their inline text becomes a single paragraph.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Converts parsed HTML documents into markdown documents.
///
/// The converter holds no per-document state and can be shared between
/// threads; each conversion works on its own parsed [`Html`].
pub struct DocumentConverter {
    selection: Box<dyn SelectionConverter>,
    cleaner: TextCleaner,
    doc_config: DocConfig,
}

impl DocumentConverter {
    /// Create a converter around a dialect strategy.
    pub fn new(selection: impl SelectionConverter + 'static) -> Self {
        Self {
            selection: Box::new(selection),
            cleaner: TextCleaner::default(),
            doc_config: DocConfig::default(),
        }
    }

    /// Create a converter for the given options.
    pub fn from_options(options: &ConvertOptions) -> Self {
        let transformer = Transformer::new(options.output_style).with_cleaner(options.cleaner());
        let config = SelectionConverterConfig::new().with_transformer(transformer);

        Self::for_dialect(options.dialect, config)
            .with_cleaner(options.cleaner())
            .with_doc_config(options.doc_config())
    }

    /// Create a converter for a dialect with the given overrides.
    pub fn for_dialect(dialect: Dialect, config: SelectionConverterConfig) -> Self {
        match dialect {
            Dialect::Html => Self::new(HtmlSelectionConverter::new(config)),
            Dialect::Confluence => Self::new(ConfluenceSelectionConverter::new(config)),
            Dialect::Google => Self::new(GoogleSelectionConverter::new(config)),
        }
    }

    /// Set the cleaner applied to the document title.
    pub fn with_cleaner(mut self, cleaner: TextCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Set the configuration of the top-level document.
    ///
    /// A title found in the document replaces the configured one.
    pub fn with_doc_config(mut self, config: DocConfig) -> Self {
        self.doc_config = config;
        self
    }

    /// Dialect of the active strategy.
    pub fn dialect(&self) -> Dialect {
        self.selection.dialect()
    }

    /// The active strategy.
    pub fn selection_converter(&self) -> &dyn SelectionConverter {
        self.selection.as_ref()
    }

    /// Convert a parsed document.
    ///
    /// Without a content root the result only holds the title.
    pub fn document_to_markdown(&self, html: &Html) -> Doc {
        let title = self.cleaner.clean(&self.selection.find_title(html));
        let mut config = self.doc_config.clone();
        if !title.is_empty() {
            log::debug!("Document title: {}", title);
            config.title = Some(title);
        }

        match self.selection.find_root(html) {
            Some(root) => {
                log::debug!("Converting {} document from {:?}", self.dialect(), root);
                self.selection_to_markdown(&root, config)
            }
            None => {
                log::debug!("No content root found for {} document", self.dialect());
                Doc::new(config)
            }
        }
    }

    /// Convert the content under `element` into a new document.
    ///
    /// Nested containers are converted through the same callback, down to
    /// [`MAX_NESTING_DEPTH`] levels.
    pub fn selection_to_markdown(&self, element: &Element, config: DocConfig) -> Doc {
        self.convert_selection(element, config, 0)
    }

    fn convert_selection(&self, element: &Element, config: DocConfig, depth: usize) -> Doc {
        let mut doc = Doc::new(config);
        let to_markdown = |element: &Element, config: DocConfig| {
            if depth < MAX_NESTING_DEPTH {
                self.convert_selection(element, config, depth + 1)
            } else {
                log::debug!("Flattening {:?} nested {} levels deep", element, depth + 1);
                self.flatten(element, config)
            }
        };

        for (index, matched) in self.selection.find_content(element).iter().enumerate() {
            log::trace!("Handling <{}> #{}", matched.tag(), index);
            self.selection
                .handle_matched(index, matched, &mut doc, &to_markdown);
        }

        doc
    }

    fn flatten(&self, element: &Element, config: DocConfig) -> Doc {
        let mut doc = Doc::new(config);
        doc.add_paragraph(self.selection.transformer().text(element));
        doc
    }

    /// Convert a parsed document and render it.
    pub fn convert(&self, html: &Html) -> String {
        self.document_to_markdown(html).render()
    }

    /// Parse and convert an HTML string.
    pub fn convert_str(&self, html: &str) -> String {
        self.convert(&Html::parse(html))
    }

    /// Parse and convert HTML read from `reader`.
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<String> {
        let html = Html::from_reader(reader)?;
        Ok(self.convert(&html))
    }
}

impl Default for DocumentConverter {
    fn default() -> Self {
        Self::from_options(&ConvertOptions::default())
    }
}

impl fmt::Debug for DocumentConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentConverter")
            .field("dialect", &self.dialect())
            .field("cleaner", &self.cleaner)
            .field("doc_config", &self.doc_config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_options_selects_dialect() {
        for dialect in Dialect::ALL {
            let converter = DocumentConverter::from_options(&ConvertOptions::new().with_dialect(dialect));
            assert_eq!(converter.dialect(), dialect);
        }
    }

    #[test]
    fn test_from_options_output_style() {
        let options = ConvertOptions::new().with_output_style(OutputStyle::Hugo);
        let converter = DocumentConverter::from_options(&options);
        assert_eq!(
            converter.selection_converter().transformer().style(),
            OutputStyle::Hugo
        );
        assert_eq!(
            converter.convert_str(r#"<p><img src="a.png" alt="A"></p>"#),
            r#"{{< figure src="./a.png" alt="A" >}}"#
        );
    }

    #[test]
    fn test_nested_divs() {
        let converter = DocumentConverter::default();
        let markdown = converter.convert_str(
            "<div><p>a</p><div><h2>b</h2><div><ul><li>c</li></ul></div></div></div><p>d</p>",
        );
        assert_eq!(markdown, "a\n\n### b\n\n* c\n\nd");
    }

    #[test]
    fn test_deeply_nested_divs() {
        let converter = DocumentConverter::default();
        let html = format!("{}<p>x</p>", "<div>".repeat(5000));
        assert_eq!(converter.convert_str(&html), "x");
    }

    #[test]
    fn test_nesting_limit_flattens_content() {
        let converter = DocumentConverter::default();
        let shallow = format!("{}<h2>a</h2><p><em>b</em></p>", "<div>".repeat(MAX_NESTING_DEPTH));
        assert_eq!(converter.convert_str(&shallow), "### a\n\n_b_");

        let deep = format!("{}<h2>a</h2><p><em>b</em></p>", "<div>".repeat(MAX_NESTING_DEPTH + 1));
        assert_eq!(converter.convert_str(&deep), "a_b_");
    }

    #[test]
    fn test_separator_and_headers_from_options() {
        let options = ConvertOptions::new()
            .with_separator("\n")
            .with_reduce_headers(false);
        let converter = DocumentConverter::from_options(&options);
        let markdown = converter.convert_str(
            "<head><title>T</title></head><h1>H</h1><div><p>a</p><p>b</p></div>",
        );
        assert_eq!(markdown, "# T\n# H\na\nb");
    }

    #[test]
    fn test_empty_title_is_absent() {
        let converter = DocumentConverter::default();
        let doc = converter.document_to_markdown(&Html::parse("<head><title> </title></head><p>x</p>"));
        assert!(doc.config().title.is_none());
        assert_eq!(doc.render(), "x");
    }

    #[test]
    fn test_missing_root_keeps_title() {
        let converter = DocumentConverter::for_dialect(
            Dialect::Html,
            SelectionConverterConfig::new().with_root_finder(|_: &Html| None),
        );
        let doc = converter.document_to_markdown(&Html::parse("<title>T</title><p>x</p>"));
        assert!(doc.is_empty());
        assert_eq!(doc.title(), "# T");
    }

    #[test]
    fn test_document_can_be_converted_twice() {
        let converter = DocumentConverter::default();
        let html = Html::parse("<p><strong>a</strong> <em>b</em></p><div><p>c</p></div>");
        let first = converter.convert(&html);
        assert_eq!(first, "**a** _b_\n\nc");
        assert_eq!(converter.convert(&html), first);
    }

    #[test]
    fn test_convert_reader() {
        let converter = DocumentConverter::default();
        let markdown = converter
            .convert_reader(Cursor::new("<p>from reader</p>".as_bytes()))
            .unwrap();
        assert_eq!(markdown, "from reader");
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentConverter>();
    }
}
