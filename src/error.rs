use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning Markdown into an HTML node tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node: {reason}")]
    InvalidNode { reason: String },

    #[error("Unbalanced delimiter '{delimiter}' in text: {text:?}")]
    UnbalancedDelimiter { text: String, delimiter: String },

    #[error("Failed to render block {block:?}: {source}")]
    Block {
        block: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn invalid_node(reason: impl Into<String>) -> Self {
        Error::InvalidNode {
            reason: reason.into(),
        }
    }

    /// Attach the raw text of the block being rendered.
    pub(crate) fn in_block(self, block: &str) -> Self {
        Error::Block {
            block: block.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with any block context peeled off.
    pub fn root(&self) -> &Error {
        match self {
            Error::Block { source, .. } => source.root(),
            other => other,
        }
    }
}
