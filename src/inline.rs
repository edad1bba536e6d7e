//! Inline span parsing.
//!
//! Text goes through a fixed sequence of stages, each taking the full span
//! list produced by the previous one: `**` bold, `*` italic, `` ` `` code,
//! then images, then links. Only plain [`Span::Text`] spans are split; spans
//! that already carry formatting pass through untouched. Images run before
//! links because `![alt](url)` also matches the link pattern.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::span::Span;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Delimited inline formats, in the order they are split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub const ALL: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    fn wrap(self, text: &str) -> Span {
        match self {
            Delimiter::Bold => Span::Bold(text.to_string()),
            Delimiter::Italic => Span::Italic(text.to_string()),
            Delimiter::Code => Span::Code(text.to_string()),
        }
    }
}

/// Parse a run of inline Markdown into spans.
pub fn parse_inline(text: &str) -> Result<Vec<Span>> {
    let mut spans = vec![Span::text(text)];
    for delimiter in Delimiter::ALL {
        spans = split_delimiter(spans, delimiter)?;
    }
    let spans = split_images(spans);
    let spans = split_links(spans);

    Ok(spans.into_iter().filter(|span| !span.is_empty()).collect())
}

/// Split every plain span on `delimiter`, alternating plain and formatted parts.
pub fn split_delimiter(spans: Vec<Span>, delimiter: Delimiter) -> Result<Vec<Span>> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Text(text) if text.contains(marker) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let parts: Vec<&str> = text.split(marker).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnbalancedDelimiter {
                text: text.clone(),
                delimiter: marker.to_string(),
            });
        }

        // Even positions sit outside the delimiters.
        out.extend(parts.iter().enumerate().map(|(i, part)| {
            if i % 2 == 0 {
                Span::text(*part)
            } else {
                delimiter.wrap(part)
            }
        }));
    }

    Ok(out)
}

/// `(alt, url)` for every `![alt](url)` in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract(&IMAGE_RE, text)
}

/// `(text, url)` for every `[text](url)` in `text`.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract(&LINK_RE, text)
}

fn extract(re: &Regex, text: &str) -> Vec<(String, String)> {
    re.captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, &IMAGE_RE, |alt, url| Span::image(alt, url))
}

pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_matches(spans, &LINK_RE, |text, url| Span::link(text, url))
}

fn split_matches(spans: Vec<Span>, re: &Regex, make: fn(&str, &str) -> Span) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut remaining = text.as_str();
        for caps in re.captures_iter(&text) {
            let literal = &caps[0];
            // Partition on the last occurrence; a literal no longer present
            // leaves the remainder untouched.
            let (before, after) = remaining.rsplit_once(literal).unwrap_or(("", remaining));
            if !before.is_empty() {
                out.push(Span::text(before));
            }
            out.push(make(&caps[1], &caps[2]));
            remaining = after;
        }
        if !remaining.is_empty() {
            out.push(Span::text(remaining));
        }
    }

    out
}
