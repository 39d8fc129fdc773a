//! Google Docs HTML exports.

use super::selection::{self, Hooks, SelectionConverter, SelectionConverterConfig, SelectionToMarkdown};
use super::Dialect;
use crate::dom::{Element, Html};
use crate::model::Doc;
use crate::transform::Transformer;

/// Converts a Google Docs export.
///
/// Same layout as a plain HTML page, except that the rules Google inserts
/// as page breaks are dropped.
#[derive(Debug, Default)]
pub struct GoogleSelectionConverter {
    transformer: Transformer,
    hooks: Hooks,
}

impl GoogleSelectionConverter {
    /// Create a converter with the given overrides.
    pub fn new(config: SelectionConverterConfig) -> Self {
        let (transformer, hooks) = config.into_parts();
        Self { transformer, hooks }
    }

    fn handle_element(&self, element: &Element, doc: &mut Doc, to_markdown: &SelectionToMarkdown<'_>) {
        if element.tag() == "hr" && is_page_break(element) {
            log::debug!("Skipping page break rule");
            return;
        }
        selection::handle_element(&self.transformer, element, doc, to_markdown);
    }
}

impl SelectionConverter for GoogleSelectionConverter {
    fn dialect(&self) -> Dialect {
        Dialect::Google
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
                self.handle_element(element, doc, to_markdown)
            });
    }
}

fn is_page_break(element: &Element) -> bool {
    element
        .attr("style")
        .is_some_and(|style| style.contains("page-break"))
}
