//! Inline markdown rewriting.
//!
//! Rewrites are defined as if applied one after another to the tree, each
//! replacing its element with text: bold, then italic, then anchors, then
//! inline code, then images. Instead of mutating the tree, the walk below
//! reproduces that outcome directly: inside a rewritten element only the
//! rewrites that come earlier in the order still apply, everything else
//! contributes its plain text.
//!
//! Inline code is the exception: its content is the serialized inner
//! markup, so tags and entities inside `code` come out literally.

use crate::convert::OutputStyle;
use crate::dom::{ChildNode, Element};

use super::Transformer;

/// Tags whose content never reaches the output.
pub const REMOVED_TAGS: &[&str] = &["style", "script", "link"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rewrite {
    Bold,
    Italic,
    Anchor,
    InlineCode,
    Image,
}

impl Rewrite {
    fn of(element: &Element) -> Option<Self> {
        match element.tag() {
            "strong" => Some(Rewrite::Bold),
            "em" => Some(Rewrite::Italic),
            "a" if element.has_attr("href") => Some(Rewrite::Anchor),
            "code" => Some(Rewrite::InlineCode),
            "img" if element.has_attr("src") => Some(Rewrite::Image),
            _ => None,
        }
    }
}

impl Transformer {
    /// Text of an element with inline rewrites applied, before cleaning.
    ///
    /// `style`, `script` and `link` descendants are dropped first.
    pub fn inline_text(&self, element: &Element) -> String {
        let mut out = String::new();
        self.write_children(element, None, &mut out);
        out
    }

    /// Depth-first walk over the children. Only rewritten elements start a
    /// nested walk, and each one lowers the ceiling, so nesting stays
    /// bounded by the number of rewrites.
    fn write_children(&self, element: &Element, ceiling: Option<Rewrite>, out: &mut String) {
        let mut stack: Vec<ChildNode> = element.child_nodes().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            let child = match node {
                ChildNode::Text(text) => {
                    out.push_str(&text);
                    continue;
                }
                ChildNode::Element(child) => child,
            };
            if child.is_any(REMOVED_TAGS) {
                continue;
            }
            match Rewrite::of(&child) {
                Some(rewrite) if ceiling.map_or(true, |c| rewrite < c) => {
                    out.push_str(&self.rewrite(&child, rewrite))
                }
                _ => stack.extend(child.child_nodes().into_iter().rev()),
            }
        }
    }

    fn rewrite(&self, element: &Element, rewrite: Rewrite) -> String {
        let inner = || {
            let mut text = String::new();
            self.write_children(element, Some(rewrite), &mut text);
            self.clean(&text)
        };

        match rewrite {
            Rewrite::Bold => format!("**{}**", inner()),
            Rewrite::Italic => format!("_{}_", inner()),
            Rewrite::Anchor => {
                let href = element.attr("href").unwrap_or_default();
                format!("[{}]({})", inner(), href)
            }
            Rewrite::InlineCode => format!("`{}`", self.clean(&self.code_markup(element))),
            Rewrite::Image => {
                let src = element.attr("src").unwrap_or_default();
                let alt = element.attr("alt").unwrap_or_default();
                self.image(&src, &alt)
            }
        }
    }

    /// Inner markup of a `code` element. Bold, italic and anchor rewrites
    /// are written as text, everything else stays markup.
    fn code_markup(&self, code: &Element) -> String {
        code.inner_html_with(|child| {
            if child.is_any(REMOVED_TAGS) {
                return Some(String::new());
            }
            Rewrite::of(child)
                .filter(|rewrite| *rewrite < Rewrite::InlineCode)
                .map(|rewrite| self.rewrite(child, rewrite))
        })
    }

    fn image(&self, src: &str, alt: &str) -> String {
        match self.style() {
            OutputStyle::Markdown => format!("![{}]({})", alt, src),
            OutputStyle::Hugo => format!("{{{{< figure src=\"./{}\" alt=\"{}\" >}}}}", src, alt),
        }
    }
}
