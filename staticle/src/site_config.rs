//! Site configuration from blog.toml

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Color theme baked into the generated page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the page's `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Site-level settings from blog.toml
///
/// These cover what the page needs but the content document does not
/// carry: the site identity, the canonical URL share links point at,
/// and presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in the header and appended to page titles
    pub site_title: String,

    /// Optional strapline under the site name
    pub tagline: Option<String>,

    /// Fallback meta description when the article has none
    pub description: Option<String>,

    /// Canonical URL of the article page; share links point here
    pub base_url: String,

    /// Site author, credited in the footer
    pub author: Person,

    /// Theme used when no stored preference or override exists
    #[serde(default)]
    pub default_theme: Theme,

    /// Text for the share intents; defaults to the page title
    pub share_text: Option<String>,
}

/// Person information (author, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Person's full name
    pub name: String,

    /// Person's email address
    pub email: String,
}

/// Errors that can occur when loading or saving the site configuration
#[derive(Error, Debug)]
pub enum SiteConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl SiteConfig {
    /// Load configuration from a blog.toml file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a blog.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SiteConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_example_toml() {
        let toml_content = r#"
site_title = "The Prompt Report"
tagline = "Practical notes on working with AI tools"
description = "A blog about prompt engineering"
base_url = "https://example.com/articles/prompt-engineering"
default_theme = "dark"
share_text = "Check out this article on prompt engineering"

[author]
name = "Jordan Blake"
email = "jordan@example.com"
"#;

        let config: SiteConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.site_title, "The Prompt Report");
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.author.email, "jordan@example.com");
    }

    #[test]
    fn test_default_theme_is_light() {
        let toml_content = r#"
site_title = "Minimal"
base_url = "https://example.com"

[author]
name = "A"
email = "a@b.com"
"#;
        let config: SiteConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.default_theme, Theme::Light);
        assert!(config.tagline.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = SiteConfig {
            site_title: "The Prompt Report".to_string(),
            tagline: None,
            description: Some("A blog about prompt engineering".to_string()),
            base_url: "https://example.com".to_string(),
            author: Person {
                name: "Jordan Blake".to_string(),
                email: "jordan@example.com".to_string(),
            },
            default_theme: Theme::Dark,
            share_text: None,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.site_title, "The Prompt Report");
        assert_eq!(parsed.default_theme, Theme::Dark);
    }
}
