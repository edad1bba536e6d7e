//! Markdown to HTML conversion for static sites.
//!
//! [`parse_markdown`] turns a document into an [`HtmlNode`] tree and
//! [`HtmlNode::render`] serializes it. The [`site`] module wires that
//! pipeline to a content directory, a page template and an output directory.

mod block;
pub mod config;
mod error;
mod html;
mod inline;
mod parser;
mod render;
pub mod site;
mod span;

pub use block::{Block, BlockKind, blocks, classify, segment};
pub use config::Config;
pub use error::{Error, Result};
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use inline::{Delimiter, extract_images, extract_links, parse_inline};
pub use parser::parse_markdown;
pub use render::block_to_html;
pub use span::Span;

/// Convert a Markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    parse_markdown(markdown).map(|root| root.render())
}
