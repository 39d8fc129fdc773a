//! Generic HTML pages.

use super::selection::{self, Hooks, SelectionConverter, SelectionConverterConfig, SelectionToMarkdown};
use super::Dialect;
use crate::dom::{Element, Html};
use crate::model::Doc;
use crate::transform::Transformer;

/// Converts a plain HTML page: content under `body`, title from `head > title`.
#[derive(Debug, Default)]
pub struct HtmlSelectionConverter {
    transformer: Transformer,
    hooks: Hooks,
}

impl HtmlSelectionConverter {
    /// Create a converter with the given overrides.
    pub fn new(config: SelectionConverterConfig) -> Self {
        let (transformer, hooks) = config.into_parts();
        Self { transformer, hooks }
    }
}

impl SelectionConverter for HtmlSelectionConverter {
    fn dialect(&self) -> Dialect {
        Dialect::Html
    }

    fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    fn find_root(&self, html: &Html) -> Option<Element> {
        self.hooks.find_root(html, selection::body_root)
    }

    fn find_title(&self, html: &Html) -> String {
        self.hooks
            .find_title(html, |html| selection::head_title(html, &self.transformer))
    }

    fn find_content(&self, element: &Element) -> Vec<Element> {
        self.hooks.find_content(element)
    }

    fn handle_matched(
        &self,
        index: usize,
        element: &Element,
        doc: &mut Doc,
        to_markdown: &SelectionToMarkdown<'_>,
    ) {
        self.hooks
            .handle_matched(index, element, doc, to_markdown, |element, doc, to_markdown| {
                selection::handle_element(&self.transformer, element, doc, to_markdown)
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::DocumentConverter;

    #[test]
    fn test_default_html_converter() {
        let converter = DocumentConverter::new(HtmlSelectionConverter::default());
        let markdown = converter.convert_str(
            r#"<html>
                <head><title>Test Doc</title></head>
                <body>
                    <h1>Section Title</h1>
                    <p>Some <strong>bold</strong> and <a href="https://example.com">a link</a>.</p>
                    <div><p>Nested</p></div>
                    <script>ignored()</script>
                </body>
            </html>"#,
        );
        assert_eq!(
            markdown,
            "# Test Doc\n\n## Section Title\n\nSome **bold** and [a link](https://example.com).\n\nNested"
        );
    }

    #[test]
    fn test_no_title() {
        let converter = DocumentConverter::new(HtmlSelectionConverter::default());
        assert_eq!(converter.convert_str("<p>Only</p>"), "Only");
    }

    #[test]
    fn test_dialect() {
        assert_eq!(HtmlSelectionConverter::default().dialect(), Dialect::Html);
    }
}
