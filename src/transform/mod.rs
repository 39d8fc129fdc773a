//! Element-to-markdown transforms.
//!
//! The [`Transformer`] turns a matched element into markdown text or
//! structured blocks: inline rewrites (bold, italic, links, inline code,
//! images), list extraction and table extraction. Every produced string
//! goes through the [`TextCleaner`].

mod cleanup;
mod inline;

pub use cleanup::TextCleaner;
pub use inline::REMOVED_TAGS;

use crate::convert::OutputStyle;
use crate::dom::Element;
use crate::model::{List, Table};

/// Converts HTML elements into markdown text and blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transformer {
    style: OutputStyle,
    cleaner: TextCleaner,
}

impl Transformer {
    /// Create a transformer for the given output style.
    pub fn new(style: OutputStyle) -> Self {
        Self {
            style,
            cleaner: TextCleaner::default(),
        }
    }

    /// Use a specific text cleaner.
    pub fn with_cleaner(mut self, cleaner: TextCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Output style (affects images and shortcodes).
    pub fn style(&self) -> OutputStyle {
        self.style
    }

    /// Text cleaner applied to extracted text.
    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// Clean a piece of text.
    pub fn clean(&self, text: &str) -> String {
        self.cleaner.clean(text)
    }

    /// Cleaned text of an element with inline rewrites applied.
    pub fn text(&self, element: &Element) -> String {
        self.clean(&self.inline_text(element))
    }

    /// Extract the `li` children of a `ul`/`ol` element.
    pub fn to_list(&self, list: &Element) -> List {
        let items = list
            .children_matching(&["li"])
            .iter()
            .map(|li| self.text(li))
            .collect();

        if list.tag() == "ol" {
            List::ordered(items)
        } else {
            List::unordered(items)
        }
    }

    /// Extract headers and rows from a `table` element.
    ///
    /// Rows without any `td` cell are dropped, which removes header rows
    /// that the row scan picks up when the table has no `tbody`.
    pub fn to_table(&self, table: &Element) -> Table {
        let headers = header_cells(table)
            .iter()
            .map(|cell| self.text(cell))
            .collect();

        let rows = table_rows(table)
            .iter()
            .filter_map(|tr| {
                let cells: Vec<String> = tr.find_tag("td").iter().map(|td| self.text(td)).collect();
                (!cells.is_empty()).then_some(cells)
            })
            .collect();

        Table::with_rows(headers, rows)
    }
}

/// Header cells: the first `thead` row's `th` (or `td`) cells, the cells
/// directly under a row-less `thead`, or every `th` of a table without
/// `thead`. Header rows after the first are ignored.
fn header_cells(table: &Element) -> Vec<Element> {
    let theads = table.find_tag("thead");
    if theads.is_empty() {
        return table.find_tag("th");
    }

    let roots = match theads.iter().find_map(|thead| thead.find_first_tag("tr")) {
        Some(first_row) => vec![first_row],
        None => theads,
    };

    let th = find_unique(&roots, "th");
    if th.is_empty() {
        find_unique(&roots, "td")
    } else {
        th
    }
}

/// Rows of every `tbody`, or of the whole table when it has none.
fn table_rows(table: &Element) -> Vec<Element> {
    let tbodies = table.find_tag("tbody");
    if tbodies.is_empty() {
        table.find_tag("tr")
    } else {
        find_unique(&tbodies, "tr")
    }
}

/// Descendants with `tag` under any of `roots`, in order, without duplicates.
fn find_unique(roots: &[Element], tag: &str) -> Vec<Element> {
    let mut found: Vec<Element> = Vec::new();
    for el in roots.iter().flat_map(|root| root.find_tag(tag)) {
        if !found.contains(&el) {
            found.push(el);
        }
    }
    found
}
