//! Dialect strategies and their overridable hooks.
//!
//! A [`SelectionConverter`] knows where a dialect keeps its content: how to
//! find the root element and the title, which elements under a container
//! carry content, and what to do with each of them. The
//! [`crate::convert::DocumentConverter`] drives the traversal and hands every
//! matched element back to the strategy together with a callback that
//! converts nested containers.

use super::Dialect;
use crate::dom::{Element, Html};
use crate::model::{Doc, DocConfig, Header};
use crate::transform::Transformer;
use std::fmt;

/// Tags matched among the direct children of a container by default.
pub const DEFAULT_CONTENT_TAGS: &[&str] = &[
    "p", "span", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "div", "table",
];

/// Callback converting a nested container into its own document.
pub type SelectionToMarkdown<'a> = dyn Fn(&Element, DocConfig) -> Doc + 'a;

/// Finds the content root of a document.
pub type RootFinder = Box<dyn Fn(&Html) -> Option<Element> + Send + Sync>;

/// Finds the (uncleaned) title of a document.
pub type TitleFinder = Box<dyn Fn(&Html) -> String + Send + Sync>;

/// Selects the content elements under a container.
pub type ContentSelector = Box<dyn Fn(&Element) -> Vec<Element> + Send + Sync>;

/// Handles one matched content element.
pub type ContentHandler =
    Box<dyn Fn(usize, &Element, &mut Doc, &SelectionToMarkdown<'_>) + Send + Sync>;

/// Strategy for one HTML dialect.
pub trait SelectionConverter: Send + Sync {
    /// Dialect handled by this converter.
    fn dialect(&self) -> Dialect;

    /// Transformer used for text extraction.
    fn transformer(&self) -> &Transformer;

    /// Element holding the document content.
    fn find_root(&self, html: &Html) -> Option<Element>;

    /// Document title, or an empty string.
    fn find_title(&self, html: &Html) -> String;

    /// Content elements under `element`, in document order.
    fn find_content(&self, element: &Element) -> Vec<Element>;

    /// Add the markdown for one matched element to `doc`.
    ///
    /// `to_markdown` converts a nested container into a new document.
    fn handle_matched(
        &self,
        index: usize,
        element: &Element,
        doc: &mut Doc,
        to_markdown: &SelectionToMarkdown<'_>,
    );
}

/// Overrides for the built-in behavior of a [`SelectionConverter`].
///
/// Every hook left unset falls back to the dialect default.
#[derive(Default)]
pub struct SelectionConverterConfig {
    transformer: Option<Transformer>,
    hooks: Hooks,
}

impl SelectionConverterConfig {
    /// Create a config without overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific transformer (output style and text cleaner).
    pub fn with_transformer(mut self, transformer: Transformer) -> Self {
        self.transformer = Some(transformer);
        self
    }

    /// Override root lookup.
    pub fn with_root_finder<F>(mut self, finder: F) -> Self
    where
        F: Fn(&Html) -> Option<Element> + Send + Sync + 'static,
    {
        self.hooks.root_finder = Some(Box::new(finder));
        self
    }

    /// Override title lookup.
    pub fn with_title_finder<F>(mut self, finder: F) -> Self
    where
        F: Fn(&Html) -> String + Send + Sync + 'static,
    {
        self.hooks.title_finder = Some(Box::new(finder));
        self
    }

    /// Override content selection.
    pub fn with_content_selector<F>(mut self, selector: F) -> Self
    where
        F: Fn(&Element) -> Vec<Element> + Send + Sync + 'static,
    {
        self.hooks.content_selector = Some(Box::new(selector));
        self
    }

    /// Override handling of matched elements.
    pub fn with_content_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(usize, &Element, &mut Doc, &SelectionToMarkdown<'_>) + Send + Sync + 'static,
    {
        self.hooks.content_handler = Some(Box::new(handler));
        self
    }

    pub(crate) fn into_parts(self) -> (Transformer, Hooks) {
        (self.transformer.unwrap_or_default(), self.hooks)
    }
}

impl fmt::Debug for SelectionConverterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionConverterConfig")
            .field("transformer", &self.transformer)
            .field("hooks", &self.hooks)
            .finish()
    }
}

/// Optional overrides shared by every dialect.
#[derive(Default)]
pub(crate) struct Hooks {
    root_finder: Option<RootFinder>,
    title_finder: Option<TitleFinder>,
    content_selector: Option<ContentSelector>,
    content_handler: Option<ContentHandler>,
}

impl Hooks {
    pub(crate) fn find_root<D>(&self, html: &Html, default: D) -> Option<Element>
    where
        D: FnOnce(&Html) -> Option<Element>,
    {
        match &self.root_finder {
            Some(finder) => finder(html),
            None => default(html),
        }
    }

    pub(crate) fn find_title<D>(&self, html: &Html, default: D) -> String
    where
        D: FnOnce(&Html) -> String,
    {
        match &self.title_finder {
            Some(finder) => finder(html),
            None => default(html),
        }
    }

    pub(crate) fn find_content(&self, element: &Element) -> Vec<Element> {
        match &self.content_selector {
            Some(selector) => selector(element),
            None => element.children_matching(DEFAULT_CONTENT_TAGS),
        }
    }

    pub(crate) fn handle_matched<D>(
        &self,
        index: usize,
        element: &Element,
        doc: &mut Doc,
        to_markdown: &SelectionToMarkdown<'_>,
        default: D,
    ) where
        D: FnOnce(&Element, &mut Doc, &SelectionToMarkdown<'_>),
    {
        match &self.content_handler {
            Some(handler) => handler(index, element, doc, to_markdown),
            None => default(element, doc, to_markdown),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("root_finder", &self.root_finder.is_some())
            .field("title_finder", &self.title_finder.is_some())
            .field("content_selector", &self.content_selector.is_some())
            .field("content_handler", &self.content_handler.is_some())
            .finish()
    }
}

/// First `body` element.
pub(crate) fn body_root(html: &Html) -> Option<Element> {
    html.find_first_tag("body")
}

/// Cleaned text of the first `title` child of the first `head`.
pub(crate) fn head_title(html: &Html, transformer: &Transformer) -> String {
    html.find_first_tag("head")
        .and_then(|head| head.children_matching(&["title"]).into_iter().next())
        .map(|title| transformer.clean(&title.text()))
        .unwrap_or_default()
}

/// Dispatch shared by every dialect.
///
/// Paragraph-like elements, headers, lists and tables become blocks; a
/// `div` is converted recursively into a nested document; any other tag is
/// ignored.
pub fn handle_element(
    transformer: &Transformer,
    element: &Element,
    doc: &mut Doc,
    to_markdown: &SelectionToMarkdown<'_>,
) {
    match element.tag() {
        "p" | "span" => doc.add_paragraph(transformer.text(element)),
        "hr" => doc.add_horizontal_rule(),
        "ul" | "ol" => doc.add_block(transformer.to_list(element)),
        "table" => doc.add_block(transformer.to_table(element)),
        "div" => doc.add_doc(to_markdown(element, doc.render_config())),
        tag => match Header::level_from_tag(tag) {
            Some(level) => doc.add_header(level, transformer.text(element)),
            None => log::trace!("Ignoring <{}> element", tag),
        },
    }
}
