//! Window configuration.
//!
//! Every field has a default, so an absent or partial TOML file still
//! produces a complete configuration.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::window::SizeHint;

pub const DEFAULT_TITLE: &str = "Minimal Webview Example";
pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;
pub const DEFAULT_URL: &str = "https://en.m.wikipedia.org/wiki/Main_Page";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Enables the web view's developer tools.
    pub debug: bool,
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub resize_hint: SizeHint,
    pub url: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            debug: true,
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            resize_hint: SizeHint::None,
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl WindowConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading window configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: WindowConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title cannot be empty".into()));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !has_scheme(&self.url) {
            return Err(ConfigError::Invalid(format!(
                "url must be absolute, got {:?}",
                self.url
            )));
        }
        Ok(())
    }
}

fn has_scheme(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && scheme
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo() {
        let config = WindowConfig::default();
        assert!(config.debug);
        assert_eq!(config.title, "Minimal Webview Example");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.resize_hint, SizeHint::None);
        assert_eq!(config.url, "https://en.m.wikipedia.org/wiki/Main_Page");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_the_default() {
        assert_eq!(WindowConfig::from_toml("").unwrap(), WindowConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = WindowConfig::from_toml(
            r#"
            title = "Docs"
            resize_hint = "fixed"
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.resize_hint, SizeHint::Fixed);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.url, DEFAULT_URL);
    }

    #[test]
    fn rejects_bad_values() {
        for toml in [
            "title = \"  \"",
            "width = 0",
            "height = -5",
            "url = \"\"",
            "url = \"en.wikipedia.org\"",
        ] {
            let err = WindowConfig::from_toml(toml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{toml}: {err}");
        }
    }

    #[test]
    fn accepts_non_http_schemes() {
        let config = WindowConfig::from_toml("url = \"file:///tmp/index.html\"").unwrap();
        assert_eq!(config.url, "file:///tmp/index.html");
    }

    #[test]
    fn reads_every_resize_hint() {
        for (name, hint) in [
            ("none", SizeHint::None),
            ("min", SizeHint::Min),
            ("max", SizeHint::Max),
            ("fixed", SizeHint::Fixed),
        ] {
            let config = WindowConfig::from_toml(&format!("resize_hint = \"{name}\"")).unwrap();
            assert_eq!(config.resize_hint, hint);
        }
    }

    #[test]
    fn unknown_hint_is_a_parse_error() {
        let err = WindowConfig::from_toml("resize_hint = \"huge\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "minimal-webview-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "width = 1024\nheight = 768\n").unwrap();
        let config = WindowConfig::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();
        let config = config.unwrap();
        assert_eq!((config.width, config.height), (1024, 768));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = WindowConfig::load_from_file("/nonexistent/minimal-webview.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
