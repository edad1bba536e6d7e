use crate::error::Result;
use crate::html::{Attributes, HtmlNode};

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Span::Text(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// The literal text carried by the span (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Convert to the leaf node that displays this span.
    pub fn to_html_node(&self) -> Result<HtmlNode> {
        let none = Attributes::new();
        match self {
            Span::Text(text) => HtmlNode::leaf(None, Some(text.as_str()), none, false),
            Span::Bold(text) => HtmlNode::leaf(Some("b"), Some(text.as_str()), none, false),
            Span::Italic(text) => HtmlNode::leaf(Some("i"), Some(text.as_str()), none, false),
            Span::Code(text) => HtmlNode::leaf(Some("code"), Some(text.as_str()), none, false),
            Span::Link { text, url } => HtmlNode::leaf(
                Some("a"),
                Some(text.as_str()),
                Attributes::from([("href", url.as_str())]),
                false,
            ),
            Span::Image { alt, url } => HtmlNode::leaf(
                Some("img"),
                Some(""),
                Attributes::from([("src", url.as_str()), ("alt", alt.as_str())]),
                true,
            ),
        }
    }
}
