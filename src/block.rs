use once_cell::sync::Lazy;
use regex::Regex;

pub const CODE_FENCE: &str = "```";

static ORDERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\. ").unwrap());

/// Block-level element kinds recognised in Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    CodeFence,
    Blockquote,
    UnorderedList,
    OrderedList,
}

/// A trimmed block of source text together with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: classify(&text),
            text,
        }
    }
}

/// Split a document into blocks separated by blank lines.
///
/// Each block has its common indentation removed and is trimmed; blocks
/// left empty are dropped.
pub fn segment(document: &str) -> Vec<String> {
    let document = document.replace("\r\n", "\n");
    document
        .split("\n\n")
        .map(|block| dedent(block).trim().to_string())
        .filter(|block| !block.is_empty())
        .collect()
}

/// Segment and classify a document in one pass.
pub fn blocks(document: &str) -> Vec<Block> {
    segment(document).into_iter().map(Block::new).collect()
}

/// Determine the kind of a trimmed block by its leading syntax.
pub fn classify(block: &str) -> BlockKind {
    if block.starts_with('#') {
        BlockKind::Heading
    } else if is_code_fence(block) {
        BlockKind::CodeFence
    } else if block.starts_with('>') {
        BlockKind::Blockquote
    } else if block.starts_with("- ") || block.starts_with("* ") {
        BlockKind::UnorderedList
    } else if ORDERED_ITEM_RE.is_match(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

fn is_code_fence(block: &str) -> bool {
    block.len() >= 2 * CODE_FENCE.len() && block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

/// Length of the leading marker of an ordered list item (`12. ` -> 4).
pub(crate) fn ordered_marker_len(line: &str) -> Option<usize> {
    ORDERED_ITEM_RE.find(line).map(|m| m.end())
}

/// Remove the whitespace prefix shared by every non-blank line.
fn dedent(block: &str) -> String {
    let prefix = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .reduce(common_prefix)
        .unwrap_or("");

    if prefix.is_empty() {
        return block.to_string();
    }

    block
        .lines()
        .map(|line| line.strip_prefix(prefix).unwrap_or(line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map(|((i, c), _)| i + c.len_utf8())
        .unwrap_or(0);
    &a[..len]
}
