use crate::block::blocks;
use crate::error::Result;
use crate::html::{Attributes, HtmlNode, LeafNode};
use crate::render::block_to_html;

/// Parse a Markdown document into a `div` holding one subtree per block.
///
/// Stops at the first block that fails to render.
pub fn parse_markdown(markdown: &str) -> Result<HtmlNode> {
    let mut children = blocks(markdown)
        .iter()
        .map(block_to_html)
        .collect::<Result<Vec<_>>>()?;

    // An empty document still yields a valid (empty) container.
    if children.is_empty() {
        children.push(LeafNode::text("").into());
    }

    HtmlNode::parent("div", children, Attributes::new())
}
