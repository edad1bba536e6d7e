//! HTML node tree produced by the Markdown pipeline.
//!
//! A tree is built from two kinds of node: [`LeafNode`] holds literal text
//! (optionally wrapped in a tag, or a self-closing element) and
//! [`ParentNode`] holds an ordered, non-empty list of children. Both are
//! validated on construction, so rendering a tree never fails.

use std::fmt;

use crate::error::{Error, Result};

/// Ordered attribute list. Keys are unique; rendering follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as ` key="value"` pairs, each preceded by a space.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// A node without children: bare text, `<tag>text</tag>`, or `<tag />`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attrs: Attributes,
    self_closing: bool,
}

impl LeafNode {
    pub fn new(
        tag: Option<&str>,
        value: Option<&str>,
        attrs: Attributes,
        self_closing: bool,
    ) -> Result<Self> {
        let tag = tag.filter(|t| !t.is_empty());
        let Some(value) = value else {
            return Err(Error::invalid_node("leaf nodes must have a value"));
        };
        if tag.is_none() && !attrs.is_empty() {
            return Err(Error::invalid_node(
                "attributes can only be given to nodes with a tag",
            ));
        }
        if tag.is_none() && self_closing {
            return Err(Error::invalid_node("self-closing nodes must have a tag"));
        }

        Ok(Self {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attrs,
            self_closing,
        })
    }

    /// Untagged text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
            self_closing: false,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    fn write_html(&self, out: &mut String) {
        let Some(tag) = &self.tag else {
            out.push_str(&self.value);
            return;
        };

        out.push('<');
        out.push_str(tag);
        self.attrs.write_html(out);
        if self.self_closing {
            out.push_str(" />");
            return;
        }
        out.push('>');
        out.push_str(&self.value);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// A tagged node whose content is its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attrs: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>, attrs: Attributes) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(Error::invalid_node("parent nodes must have a tag"));
        }
        if children.is_empty() {
            return Err(Error::invalid_node(format!(
                "parent node <{tag}> must have children"
            )));
        }

        Ok(Self {
            tag,
            children,
            attrs,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        self.attrs.write_html(out);
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Build a validated leaf node.
    pub fn leaf(
        tag: Option<&str>,
        value: Option<&str>,
        attrs: Attributes,
        self_closing: bool,
    ) -> Result<Self> {
        LeafNode::new(tag, value, attrs, self_closing).map(HtmlNode::Leaf)
    }

    /// Build a validated parent node.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>, attrs: Attributes) -> Result<Self> {
        ParentNode::new(tag, children, attrs).map(HtmlNode::Parent)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attrs(),
            HtmlNode::Parent(parent) => parent.attrs(),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children(),
        }
    }

    /// Serialize the tree to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tagged(tag: &str, value: &str) -> HtmlNode {
        HtmlNode::leaf(Some(tag), Some(value), Attributes::new(), false).unwrap()
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let attrs = Attributes::from([("id", "main"), ("class", "flex")]);
        assert_eq!(attrs.to_html(), r#" id="main" class="flex""#);
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn attributes_keep_keys_unique() {
        let attrs = Attributes::new()
            .with("class", "a")
            .with("id", "x")
            .with("class", "b");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.to_html(), r#" class="b" id="x""#);
        assert_eq!(attrs.get("class"), Some("b"));
    }

    #[test]
    fn untagged_leaf_renders_bare_text() {
        let node = HtmlNode::leaf(None, Some("x"), Attributes::new(), false).unwrap();
        assert_eq!(node.render(), "x");
        assert_eq!(HtmlNode::from(LeafNode::text("Hello, World!")).render(), "Hello, World!");
    }

    #[test]
    fn tagged_leaf() {
        assert_eq!(tagged("p", "hi").render(), "<p>hi</p>");

        let link = HtmlNode::leaf(Some("a"), Some("go"), Attributes::from([("href", "u")]), false)
            .unwrap();
        assert_eq!(link.render(), r#"<a href="u">go</a>"#);
    }

    #[test]
    fn self_closing_leaf() {
        let img = HtmlNode::leaf(
            Some("img"),
            Some(""),
            Attributes::from([("src", "http://www.x.com"), ("alt", "Twitter")]),
            true,
        )
        .unwrap();
        assert_eq!(img.render(), r#"<img src="http://www.x.com" alt="Twitter" />"#);

        let br = HtmlNode::leaf(Some("br"), Some(""), Attributes::new(), true).unwrap();
        assert_eq!(br.render(), "<br />");
    }

    #[test]
    fn leaf_without_value_is_invalid() {
        let err = LeafNode::new(Some("p"), None, Attributes::new(), false).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));
    }

    #[test]
    fn leaf_attributes_require_tag() {
        let err = LeafNode::new(None, Some("x"), Attributes::from([("id", "a")]), false)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));

        let err = LeafNode::new(Some(""), Some("x"), Attributes::from([("id", "a")]), false)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));
    }

    #[test]
    fn self_closing_leaf_requires_tag() {
        let err = LeafNode::new(None, Some(""), Attributes::new(), true).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));
    }

    #[test]
    fn parent_requires_tag_and_children() {
        let err = ParentNode::new("", vec![tagged("b", "x")], Attributes::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));

        let err = ParentNode::new("p", Vec::new(), Attributes::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { .. }));
    }

    #[test]
    fn parent_renders_children_in_order() {
        let node = HtmlNode::parent(
            "p",
            vec![
                tagged("b", "Bold text"),
                LeafNode::text("Normal text").into(),
                tagged("i", "italic text"),
                LeafNode::text("Normal text").into(),
            ],
            Attributes::new(),
        )
        .unwrap();
        assert_eq!(
            node.render(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn nested_parents() {
        let head = HtmlNode::parent("head", vec![tagged("title", "My Webpage")], Attributes::new())
            .unwrap();
        let div = HtmlNode::parent(
            "div",
            vec![tagged("p", "Hello, World!")],
            Attributes::from([("class", "flex")]),
        )
        .unwrap();
        let body = HtmlNode::parent("body", vec![div], Attributes::new()).unwrap();
        let html = HtmlNode::parent("html", vec![head, body], Attributes::new()).unwrap();

        assert_eq!(
            html.render(),
            r#"<html><head><title>My Webpage</title></head><body><div class="flex"><p>Hello, World!</p></div></body></html>"#
        );
        assert_eq!(html.children().len(), 2);
        assert_eq!(html.tag(), Some("html"));
    }

    #[test]
    fn render_is_repeatable() {
        let node = HtmlNode::parent("ul", vec![tagged("li", "a"), tagged("li", "b")], Attributes::new())
            .unwrap();
        let first = node.render();
        assert_eq!(node.render(), first);
        assert_eq!(node.to_string(), first);
    }

    #[test]
    fn accessors_expose_node_parts() {
        let attrs = Attributes::from([("src", "a.png"), ("alt", "a")]);
        let img = LeafNode::new(Some("img"), Some(""), attrs.clone(), true).unwrap();
        assert_eq!(img.tag(), Some("img"));
        assert_eq!(img.value(), "");
        assert!(img.is_self_closing());
        assert_eq!(
            img.attrs().iter().collect::<Vec<_>>(),
            vec![("src", "a.png"), ("alt", "a")]
        );

        let text = LeafNode::text("plain");
        assert_eq!(text.value(), "plain");
        assert!(!text.is_self_closing());

        let node = HtmlNode::parent("figure", vec![img.into()], Attributes::from([("id", "f")]))
            .unwrap();
        assert_eq!(node.attrs().get("id"), Some("f"));
        assert_eq!(node.children()[0].attrs(), &attrs);
        assert!(HtmlNode::from(text).attrs().is_empty());
    }

    #[test]
    fn structural_equality() {
        let a = HtmlNode::parent("p", vec![tagged("b", "x")], Attributes::new()).unwrap();
        let b = HtmlNode::parent("p", vec![tagged("b", "x")], Attributes::new()).unwrap();
        let c = HtmlNode::parent("p", vec![tagged("i", "x")], Attributes::new()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
