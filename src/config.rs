use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub title: TitleConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Markdown source tree
    pub content: PathBuf,
    /// Copied verbatim into the output directory
    pub static_dir: PathBuf,
    /// Wiped and recreated on every build
    pub output: PathBuf,
    /// Page template; the built-in template is used if the file is missing
    pub template: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Capitalize each word of the page title
    pub title_case: bool,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self { title_case: true }
    }
}

impl Config {
    /// The configuration bundled with the binary.
    pub fn compiled_default() -> Self {
        // Checked by build.rs, so parsing cannot fail here.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Returns `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load config from `path`, falling back to the compiled default when absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load(path)?.unwrap_or_else(Self::compiled_default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load(&dir.path().join("mdsite.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "[paths]\noutput = \"dist\"\n").unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert_eq!(config.paths.output, PathBuf::from("dist"));
        assert_eq!(config.paths.content, PathBuf::from("content"));
        assert!(config.title.title_case);
    }

    #[test]
    fn invalid_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mdsite.toml");
        fs::write(&path, "[title]\ntitle_case = \"yes\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_or_default_falls_back() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::compiled_default());
    }
}
