//! Element handles and tree queries.

use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::QualName;
use markup5ever_rcdom::{Handle, NodeData};
use std::fmt;
use std::io;

/// A handle onto one node of a parsed document.
///
/// Cloning is cheap (reference counted). Most handles point at elements;
/// the document node returned by [`crate::dom::Html::root`] has an empty tag.
///
/// Every handle also holds the document node: rcdom tears the whole tree
/// down when the document node is dropped, so the tree must stay alive as
/// long as any handle into it does.
#[derive(Clone)]
pub struct Element {
    handle: Handle,
    document: Handle,
}

/// A direct child of an element, in source order.
#[derive(Debug, Clone)]
pub enum ChildNode {
    /// A nested element.
    Element(Element),
    /// A run of character data.
    Text(String),
}

impl Element {
    pub(crate) fn document(document: Handle) -> Self {
        Self {
            handle: document.clone(),
            document,
        }
    }

    fn wrap(&self, handle: &Handle) -> Self {
        Self {
            handle: handle.clone(),
            document: self.document.clone(),
        }
    }

    /// Lowercase local tag name, or an empty string for non-element nodes.
    pub fn tag(&self) -> &str {
        match &self.handle.data {
            NodeData::Element { name, .. } => &*name.local,
            _ => "",
        }
    }

    /// Check whether this element has one of the given tags.
    pub fn is_any(&self, tags: &[&str]) -> bool {
        let tag = self.tag();
        !tag.is_empty() && tags.contains(&tag)
    }

    /// Value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|a| &*a.name.local == name)
                .map(|a| String::from(&*a.value)),
            _ => None,
        }
    }

    /// Check whether an attribute is present (even if empty).
    pub fn has_attr(&self, name: &str) -> bool {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => {
                attrs.borrow().iter().any(|a| &*a.name.local == name)
            }
            _ => false,
        }
    }

    /// The `id` attribute.
    pub fn id(&self) -> Option<String> {
        self.attr("id")
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> Vec<String> {
        self.attr("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Check class-set membership.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|entry| entry == class))
    }

    /// Child elements in source order.
    pub fn children(&self) -> Vec<Element> {
        self.handle
            .children
            .borrow()
            .iter()
            .filter(|child| matches!(child.data, NodeData::Element { .. }))
            .map(|child| self.wrap(child))
            .collect()
    }

    /// Child elements whose tag is one of `tags`, in source order.
    pub fn children_matching(&self, tags: &[&str]) -> Vec<Element> {
        self.children()
            .into_iter()
            .filter(|child| child.is_any(tags))
            .collect()
    }

    /// Element and text children in source order. Comments and other node
    /// kinds are skipped.
    pub fn child_nodes(&self) -> Vec<ChildNode> {
        self.handle
            .children
            .borrow()
            .iter()
            .filter_map(|child| match &child.data {
                NodeData::Element { .. } => Some(ChildNode::Element(self.wrap(child))),
                NodeData::Text { contents } => Some(ChildNode::Text(String::from(&**contents.borrow()))),
                _ => None,
            })
            .collect()
    }

    /// All descendant elements in document (pre-)order, excluding `self`.
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.walk(|el| {
            out.push(el);
            true
        });
        out
    }

    /// Descendant elements with the given tag, in document order.
    pub fn find_tag(&self, tag: &str) -> Vec<Element> {
        self.find(|el| el.tag() == tag)
    }

    /// Descendant elements carrying the given class, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<Element> {
        self.find(|el| el.has_class(class))
    }

    /// Descendant elements matching the predicate, in document order.
    pub fn find<F>(&self, predicate: F) -> Vec<Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants()
            .into_iter()
            .filter(|el| predicate(el))
            .collect()
    }

    /// First descendant element with the given tag.
    pub fn find_first_tag(&self, tag: &str) -> Option<Element> {
        self.find_first(|el| el.tag() == tag)
    }

    /// First descendant element matching the predicate, in document order.
    pub fn find_first<F>(&self, predicate: F) -> Option<Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = None;
        self.walk(|el| {
            if predicate(&el) {
                found = Some(el);
                false
            } else {
                true
            }
        });
        found
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<Handle> = self.handle.children.borrow().iter().rev().cloned().collect();
        while let Some(node) = stack.pop() {
            match &node.data {
                NodeData::Text { contents } => out.push_str(&contents.borrow()),
                NodeData::Element { .. } => stack.extend(node.children.borrow().iter().rev().cloned()),
                _ => {}
            }
        }
        out
    }

    /// Serialized markup of the children, entities escaped.
    pub fn inner_html(&self) -> String {
        self.inner_html_with(|_| None)
    }

    /// Serialized markup of the children. Elements for which `replace`
    /// returns some text are written as that text instead of as markup.
    pub fn inner_html_with<F>(&self, replace: F) -> String
    where
        F: Fn(&Element) -> Option<String>,
    {
        let markup = InnerHtml {
            element: self,
            replace: &replace,
        };
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        };

        let mut output = Vec::new();
        if let Err(err) = serialize(&mut output, &markup, opts) {
            log::warn!("Failed to serialize <{}>: {}", self.tag(), err);
        }
        String::from_utf8_lossy(&output).into_owned()
    }

    /// Pre-order walk over the descendant elements. The visitor returns
    /// `false` to stop.
    fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(Element) -> bool,
    {
        let mut stack: Vec<Handle> = self.handle.children.borrow().iter().rev().cloned().collect();
        while let Some(node) = stack.pop() {
            if let NodeData::Element { .. } = node.data {
                stack.extend(node.children.borrow().iter().rev().cloned());
                if !visit(self.wrap(&node)) {
                    return;
                }
            }
        }
    }
}

enum SerializeOp {
    Open(Handle),
    Close(QualName),
}

struct InnerHtml<'a, F> {
    element: &'a Element,
    replace: &'a F,
}

impl<F> Serialize for InnerHtml<'_, F>
where
    F: Fn(&Element) -> Option<String>,
{
    fn serialize<S>(&self, serializer: &mut S, _traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let children = self.element.handle.children.borrow();
        let mut ops: Vec<SerializeOp> = children.iter().rev().map(|h| SerializeOp::Open(h.clone())).collect();
        drop(children);

        while let Some(op) = ops.pop() {
            let handle = match op {
                SerializeOp::Open(handle) => handle,
                SerializeOp::Close(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
            };

            match &handle.data {
                NodeData::Element { name, attrs, .. } => {
                    if let Some(text) = (self.replace)(&self.element.wrap(&handle)) {
                        serializer.write_text(&text)?;
                        continue;
                    }
                    serializer.start_elem(
                        name.clone(),
                        attrs.borrow().iter().map(|at| (&at.name, &at.value[..])),
                    )?;
                    ops.push(SerializeOp::Close(name.clone()));
                    ops.extend(handle.children.borrow().iter().rev().map(|h| SerializeOp::Open(h.clone())));
                }
                NodeData::Text { contents } => serializer.write_text(&contents.borrow())?,
                NodeData::Comment { contents } => serializer.write_comment(contents)?,
                _ => {}
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Element");
        s.field("tag", &self.tag());
        if let Some(id) = self.id() {
            s.field("id", &id);
        }
        if let Some(class) = self.attr("class") {
            s.field("class", &class);
        }
        s.finish()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        std::rc::Rc::ptr_eq(&self.handle, &other.handle)
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::Html;

    fn body(html: &str) -> crate::dom::Element {
        Html::parse(html).find_first_tag("body").unwrap()
    }

    #[test]
    fn test_tag_and_attrs() {
        let el = body(r#"<a href="https://example.com" class="x  y">link</a>"#).children()[0].clone();
        assert_eq!(el.tag(), "a");
        assert_eq!(el.attr("href").as_deref(), Some("https://example.com"));
        assert!(el.has_attr("class"));
        assert!(!el.has_attr("title"));
        assert_eq!(el.classes(), vec!["x", "y"]);
        assert!(el.has_class("y"));
        assert!(!el.has_class("x y"));
    }

    #[test]
    fn test_children_matching_is_direct_only() {
        let b = body("<p>1</p><div><p>2</p></div><span>3</span><em>4</em>");
        let matched: Vec<_> = b
            .children_matching(&["p", "span", "div"])
            .iter()
            .map(|e| e.tag().to_string())
            .collect();
        assert_eq!(matched, vec!["p", "div", "span"]);
    }

    #[test]
    fn test_descendants_document_order() {
        let b = body("<div><p><em>a</em></p><ul><li>b</li></ul></div>");
        let tags: Vec<_> = b.descendants().iter().map(|e| e.tag().to_string()).collect();
        assert_eq!(tags, vec!["div", "p", "em", "ul", "li"]);
    }

    #[test]
    fn test_find_first_stops_at_first_match() {
        let b = body(r#"<div class="code"><pre id="one">1</pre><pre id="two">2</pre></div>"#);
        let pre = b.find_first_tag("pre").unwrap();
        assert_eq!(pre.id().as_deref(), Some("one"));
        assert_eq!(b.find_tag("pre").len(), 2);
        assert_eq!(b.find_by_class("code").len(), 1);
    }

    #[test]
    fn test_text_skips_comments() {
        let b = body("<p>Hello <!-- hidden --><strong>World</strong></p>");
        assert_eq!(b.text(), "Hello World");
    }

    #[test]
    fn test_child_nodes() {
        let p = body("<p>a<b>c</b>d</p>").children()[0].clone();
        let nodes = p.child_nodes();
        assert_eq!(nodes.len(), 3);
        assert!(matches!(&nodes[0], super::ChildNode::Text(t) if t == "a"));
        assert!(matches!(&nodes[1], super::ChildNode::Element(e) if e.tag() == "b"));
    }

    #[test]
    fn test_inner_html_keeps_markup_and_entities() {
        let p = body("<p>a<span class=\"k\">b</span> &amp; <!--c--><br>d</p>").children()[0].clone();
        assert_eq!(p.inner_html(), "a<span class=\"k\">b</span> &amp; <!--c--><br>d");
    }

    #[test]
    fn test_inner_html_with_replacement() {
        let p = body("<p>x <b>bold</b> <i>y &lt; z</i></p>").children()[0].clone();
        let markup = p.inner_html_with(|el| (el.tag() == "b").then(|| format!("*{}*", el.text())));
        assert_eq!(markup, "x *bold* <i>y &lt; z</i>");
    }

    #[test]
    fn test_deep_nesting() {
        let html = Html::parse(&format!("{}<p id=\"leaf\">x</p>", "<div>".repeat(5000)));
        let b = html.find_first_tag("body").unwrap();
        assert_eq!(b.text(), "x");
        assert_eq!(b.descendants().len(), 5001);
        assert_eq!(b.find_first_tag("p").and_then(|p| p.id()).as_deref(), Some("leaf"));
        assert!(b.inner_html().ends_with("<p id=\"leaf\">x</p></div></div>"));
    }
}
