use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Block, BlockKind, CODE_FENCE, ordered_marker_len};
use crate::error::Result;
use crate::html::{Attributes, HtmlNode};
use crate::inline::parse_inline;
use crate::span::Span;

const MAX_HEADING_LEVEL: usize = 6;

static LANGUAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_+-]+$").unwrap());

/// Convert one classified block into its HTML subtree.
///
/// Failures carry the raw block text.
pub fn block_to_html(block: &Block) -> Result<HtmlNode> {
    let node = match block.kind {
        BlockKind::Paragraph => paragraph(&block.text),
        BlockKind::Heading => heading(&block.text),
        BlockKind::CodeFence => code_fence(&block.text),
        BlockKind::Blockquote => blockquote(&block.text),
        BlockKind::UnorderedList => list(&block.text, false),
        BlockKind::OrderedList => list(&block.text, true),
    };
    node.map_err(|e| e.in_block(&block.text))
}

/// Inline-parse `text` into leaf nodes.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    parse_inline(text)?.iter().map(Span::to_html_node).collect()
}

fn wrap(tag: &str, text: &str) -> Result<HtmlNode> {
    HtmlNode::parent(tag, text_to_children(text)?, Attributes::new())
}

fn paragraph(text: &str) -> Result<HtmlNode> {
    wrap("p", text)
}

fn heading(text: &str) -> Result<HtmlNode> {
    let rest = text.trim_start_matches('#');
    let level = (text.len() - rest.len()).min(MAX_HEADING_LEVEL);
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    wrap(&format!("h{level}"), rest)
}

fn code_fence(text: &str) -> Result<HtmlNode> {
    let inner = text
        .strip_prefix(CODE_FENCE)
        .and_then(|t| t.strip_suffix(CODE_FENCE))
        .unwrap_or(text);

    // A lone word on the opening line names the language; anything else is code.
    let (language, body) = match inner.split_once('\n') {
        Some((info, body)) if LANGUAGE_RE.is_match(info.trim()) => (Some(info.trim()), body),
        _ => (None, inner),
    };

    let attrs = match language {
        Some(lang) => Attributes::from([("class", format!("language-{lang}"))]),
        None => Attributes::new(),
    };
    let code = HtmlNode::leaf(Some("code"), Some(body.trim()), attrs, false)?;
    HtmlNode::parent("pre", vec![code], Attributes::new())
}

fn blockquote(text: &str) -> Result<HtmlNode> {
    let quoted = text
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    wrap("blockquote", &quoted)
}

fn list(text: &str, ordered: bool) -> Result<HtmlNode> {
    let items = text
        .lines()
        .map(|line| {
            let item = if ordered {
                ordered_marker_len(line).map_or(line, |len| &line[len..])
            } else {
                line.strip_prefix("- ")
                    .or_else(|| line.strip_prefix("* "))
                    .unwrap_or(line)
            };
            wrap("li", item)
        })
        .collect::<Result<Vec<_>>>()?;

    let tag = if ordered { "ol" } else { "ul" };
    HtmlNode::parent(tag, items, Attributes::new())
}
