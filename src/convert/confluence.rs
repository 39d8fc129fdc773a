//! Confluence page exports.
//!
//! Content lives under `#main-content` and the title in `#title-text`.
//! Besides the shared dispatch, two kinds of `div` get special handling:
//! information panels and highlighted code blocks.

use super::selection::{self, Hooks, SelectionConverter, SelectionConverterConfig, SelectionToMarkdown};
use super::{Dialect, OutputStyle};
use crate::dom::{Element, Html};
use crate::model::{CodeBlock, Doc, DocConfig};
use crate::transform::Transformer;

const MAIN_CONTENT_ID: &str = "main-content";
const TITLE_ID: &str = "title-text";

/// Note panels carry this class and nothing else.
const PANEL_NOTE_CLASS: &str = "panel";
const PANEL_MACRO_CLASS: &str = "confluence-information-macro";
const PANEL_BODY_CLASS: &str = "confluence-information-macro-body";

/// Panel class to notice type, checked in order.
const NOTICE_TYPES: [(&str, &str); 5] = [
    (PANEL_NOTE_CLASS, "note"),
    ("confluence-information-macro-information", "info"),
    ("confluence-information-macro-note", "warning"),
    ("confluence-information-macro-tip", "tip"),
    ("confluence-information-macro-warning", "error"),
];
const DEFAULT_NOTICE_TYPE: &str = "note";

const CODE_CLASS: &str = "code";
const HIGHLIGHTER_PARAMS_ATTR: &str = "data-syntaxhighlighter-params";
const DEFAULT_LANGUAGE: &str = "txt";

/// Converts a Confluence page export.
#[derive(Debug, Default)]
pub struct ConfluenceSelectionConverter {
    transformer: Transformer,
    hooks: Hooks,
}

impl ConfluenceSelectionConverter {
    /// Create a converter with the given overrides.
    pub fn new(config: SelectionConverterConfig) -> Self {
        let (transformer, hooks) = config.into_parts();
        Self { transformer, hooks }
    }

    fn handle_element(&self, element: &Element, doc: &mut Doc, to_markdown: &SelectionToMarkdown<'_>) {
        if element.tag() == "div" {
            if is_panel(element) {
                doc.add_doc(self.to_panel(element, doc.render_config(), to_markdown));
                return;
            }
            if element.has_class(CODE_CLASS) {
                doc.add_block(self.to_code_block(element));
                return;
            }
        }
        selection::handle_element(&self.transformer, element, doc, to_markdown);
    }

    /// Convert the panel body. Hugo output wraps it in a notice shortcode.
    fn to_panel(&self, panel: &Element, config: DocConfig, to_markdown: &SelectionToMarkdown<'_>) -> Doc {
        let body = panel.find_first(|el| el.has_class(PANEL_BODY_CLASS));
        let inner = match body {
            Some(body) => to_markdown(&body, config),
            None => Doc::new(config),
        };

        let notice = notice_type(panel);
        log::debug!("Found {} panel", notice);

        if self.transformer.style() != OutputStyle::Hugo {
            return inner;
        }

        let mut wrapper = Doc::new(DocConfig::new().with_separator("\n"));
        wrapper.add_paragraph(format!("{{{{% notice {} %}}}}", notice));
        wrapper.add_doc(inner);
        wrapper.add_paragraph("{{% /notice %}}");
        wrapper
    }

    /// Fenced block from the first `pre` under the div. The code is kept
    /// as-is apart from inline rewrites.
    fn to_code_block(&self, element: &Element) -> CodeBlock {
        match element.find_first_tag("pre") {
            Some(pre) => {
                let lang = highlighter_language(pre.attr(HIGHLIGHTER_PARAMS_ATTR).as_deref());
                log::debug!("Found code block ({})", lang);
                CodeBlock::new(lang, self.transformer.inline_text(&pre))
            }
            None => CodeBlock::new(DEFAULT_LANGUAGE, ""),
        }
    }
}

impl SelectionConverter for ConfluenceSelectionConverter {
    fn dialect(&self) -> Dialect {
        Dialect::Confluence
    }

    fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    fn find_root(&self, html: &Html) -> Option<Element> {
        self.hooks
            .find_root(html, |html| html.find_by_id(MAIN_CONTENT_ID))
    }

    fn find_title(&self, html: &Html) -> String {
        self.hooks.find_title(html, |html| {
            html.find_by_id(TITLE_ID)
                .map(|title| self.transformer.clean(&title.text()))
                .unwrap_or_default()
        })
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

/// Language named by a `data-syntaxhighlighter-params` value such as
/// `brush: python; gutter: false; theme: Confluence`.
///
/// The last `brush` entry wins. Confluence tags unmarked blocks as `php`,
/// so `php` is reported as `txt` like a missing brush.
pub fn highlighter_language(params: Option<&str>) -> String {
    let brush = params
        .into_iter()
        .flat_map(|params| params.split(';'))
        .filter_map(|param| {
            let mut parts = param.split(':');
            let key = parts.next()?.trim();
            let value = parts.next()?.trim();
            (key == "brush").then_some(value)
        })
        .last();

    match brush {
        Some(lang) if !lang.is_empty() && lang != "php" => lang.to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Note panels are matched on the exact class attribute; the other panels
/// carry the macro class.
fn is_panel(element: &Element) -> bool {
    element.attr("class").as_deref() == Some(PANEL_NOTE_CLASS) || element.has_class(PANEL_MACRO_CLASS)
}

fn notice_type(panel: &Element) -> &'static str {
    NOTICE_TYPES
        .iter()
        .find(|(class, _)| panel.has_class(class))
        .map_or(DEFAULT_NOTICE_TYPE, |(_, notice)| *notice)
}
