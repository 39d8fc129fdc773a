//! Queryable HTML document model.
//!
//! The converter never looks at raw bytes. Parsing is delegated to the
//! `html5ever` + `markup5ever_rcdom` ecosystem:
//! - `html5ever`: browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: reference-counted DOM tree
//!
//! Malformed markup is recovered the same way a browser would, so a
//! `<table>` without `<tbody>` gets one inserted, stray text ends up in
//! `<body>`, and so on. Everything above this module only sees [`Html`]
//! and [`Element`] handles.

mod element;

pub use element::{ChildNode, Element};

use crate::error::Result;
use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;
use std::fmt;
use std::io::Read;

/// A parsed HTML document.
pub struct Html {
    dom: RcDom,
}

impl Html {
    /// Parse a complete HTML document from a string.
    ///
    /// Parsing never fails; invalid markup is repaired by the parser.
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    /// Parse an HTML document from a reader.
    ///
    /// The input is decoded as UTF-8, replacing invalid sequences. Only I/O
    /// failures are reported.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut reader)?;
        Ok(Self { dom })
    }

    /// The document node. All queries on the document start here.
    pub fn root(&self) -> Element {
        Element::document(self.dom.document.clone())
    }

    /// First element with the given tag, in document order.
    pub fn find_first_tag(&self, tag: &str) -> Option<Element> {
        self.root().find_first_tag(tag)
    }

    /// First element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        self.root()
            .find_first(|el| el.id().as_deref() == Some(id))
    }

    /// First element matching the predicate, in document order.
    pub fn find_first<F>(&self, predicate: F) -> Option<Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.root().find_first(predicate)
    }
}

impl fmt::Debug for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Html")
            .field("elements", &self.root().descendants().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_inserts_implied_structure() {
        let html = Html::parse("<p>Hello</p>");
        let body = html.find_first_tag("body").unwrap();
        assert_eq!(body.children().len(), 1);
        assert_eq!(body.children()[0].tag(), "p");
        assert!(html.find_first_tag("head").is_some());
    }

    #[test]
    fn test_find_by_id() {
        let html = Html::parse(
            r#"<div><span id="title-text">Title</span></div><div id="main-content"></div>"#,
        );
        assert_eq!(html.find_by_id("title-text").unwrap().text(), "Title");
        assert_eq!(html.find_by_id("main-content").unwrap().tag(), "div");
        assert!(html.find_by_id("missing").is_none());
    }

    #[test]
    fn test_from_reader() {
        let reader = Cursor::new(b"<html><head><title>T</title></head></html>".to_vec());
        let html = Html::from_reader(reader).unwrap();
        assert_eq!(html.find_first_tag("title").unwrap().text(), "T");
    }

    #[test]
    fn test_from_reader_lossy_utf8() {
        let reader = Cursor::new(b"<p>a\xffb</p>".to_vec());
        let html = Html::from_reader(reader).unwrap();
        assert_eq!(html.find_first_tag("p").unwrap().text(), "a\u{fffd}b");
    }
}
