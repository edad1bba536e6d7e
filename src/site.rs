//! Static site generation around the Markdown pipeline.
//!
//! Copies static assets, turns every Markdown file under the content tree
//! into a page, and fills the page template's `{{ title }}` and
//! `{{ content }}` markers.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::{Config, ConfigError, TitleConfig};
use crate::parser::parse_markdown;

pub const TITLE_MARKER: &str = "{{ title }}";
pub const CONTENT_MARKER: &str = "{{ content }}";

const DEFAULT_TEMPLATE: &str = include_str!("default_template.html");

static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<h1>(.*?)</h1>").unwrap());

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TitleError {
    #[error("No <h1> title found")]
    Missing,

    #[error("Expected one <h1> title, found {0}")]
    Multiple(usize),
}

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to convert {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: crate::Error,
    },

    #[error("Bad title in {path}: {source}")]
    Title { path: PathBuf, source: TitleError },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Counts reported by a full build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files_copied: usize,
    pub pages: usize,
}

/// Copy static assets and generate every page described by `config`.
pub fn build(config: &Config) -> Result<BuildSummary, SiteError> {
    let paths = &config.paths;

    let files_copied = if paths.static_dir.is_dir() {
        copy_dir(&paths.static_dir, &paths.output)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping asset copy",
            paths.static_dir.display()
        );
        reset_dir(&paths.output)?;
        0
    };

    let template = load_template(&paths.template)?;
    let pages = generate_pages(&paths.content, &template, &paths.output, &config.title)?;

    log::info!(
        "Built {} page(s) and copied {} file(s) into {}",
        pages,
        files_copied,
        paths.output.display()
    );
    Ok(BuildSummary {
        files_copied,
        pages,
    })
}

/// Read the page template, falling back to the built-in one if the file is missing.
pub fn load_template(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        log::warn!(
            "Template {} not found, using built-in template",
            path.display()
        );
        return Ok(DEFAULT_TEMPLATE.to_string());
    }
    fs::read_to_string(path).map_err(io_err(path))
}

fn reset_dir(dest: &Path) -> Result<(), SiteError> {
    if dest.exists() {
        fs::remove_dir_all(dest).map_err(io_err(dest))?;
        log::info!("Deleted dir {}", dest.display());
    }
    fs::create_dir_all(dest).map_err(io_err(dest))?;
    log::info!("Created dir {}", dest.display());
    Ok(())
}

/// Replace `dest` with a recursive copy of `src`. Returns the number of files copied.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    reset_dir(dest)?;
    copy_tree(src, dest)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for entry in sorted_entries(src)? {
        let target = dest.join(entry.file_name().unwrap_or_default());
        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(io_err(&target))?;
            log::info!("Created dir {}", target.display());
            copied += copy_tree(&entry, &target)?;
        } else {
            fs::copy(&entry, &target).map_err(io_err(&entry))?;
            log::info!("Copied {} to {}", entry.display(), target.display());
            copied += 1;
        }
    }
    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_err(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err(dir))?;
    entries.sort();
    Ok(entries)
}

/// The single `<h1>` of a rendered page.
pub fn extract_title(html: &str, title: &TitleConfig) -> Result<String, TitleError> {
    let headings: Vec<&str> = H1_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    match headings.as_slice() {
        [] => Err(TitleError::Missing),
        [heading] if title.title_case => Ok(title_case(heading)),
        [heading] => Ok(heading.to_string()),
        many => Err(TitleError::Multiple(many.len())),
    }
}

/// Upper-case the first letter of every word and lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if prev_is_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_is_letter = ch.is_alphabetic();
    }
    out
}

pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_MARKER, title)
        .replace(CONTENT_MARKER, content)
}

/// Render one Markdown file into `dest` using `template`.
pub fn generate_page(
    src: &Path,
    template: &str,
    dest: &Path,
    title: &TitleConfig,
) -> Result<(), SiteError> {
    log::info!("Generating page from {} -> {}", src.display(), dest.display());

    let markdown = fs::read_to_string(src).map_err(io_err(src))?;
    let html = parse_markdown(&markdown)
        .map_err(|source| SiteError::Markdown {
            path: src.to_path_buf(),
            source,
        })?
        .render();
    let page_title = extract_title(&html, title).map_err(|source| SiteError::Title {
        path: src.to_path_buf(),
        source,
    })?;
    let page = apply_template(template, &page_title, &html);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    fs::write(dest, page).map_err(io_err(dest))
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `output_dir`. Returns the number of pages written.
pub fn generate_pages(
    content_dir: &Path,
    template: &str,
    output_dir: &Path,
    title: &TitleConfig,
) -> Result<usize, SiteError> {
    let mut pages = 0;
    for entry in sorted_entries(content_dir)? {
        let target = output_dir.join(entry.file_name().unwrap_or_default());
        if entry.is_dir() {
            pages += generate_pages(&entry, template, &target, title)?;
        } else if entry.extension().is_some_and(|ext| ext == "md") {
            generate_page(&entry, template, &target.with_extension("html"), title)?;
            pages += 1;
        } else {
            log::debug!("Skipping non-Markdown file {}", entry.display());
        }
    }
    Ok(pages)
}
