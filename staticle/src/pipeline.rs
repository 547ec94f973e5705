//! Three-stage page generation pipeline
//!
//! This module orchestrates the three stages of page generation:
//! 1. **Loading**: Read the site configuration, the article content
//!    document, and any comment submissions
//! 2. **Assembly**: Resolve the theme preference and assemble the page
//!    model, substituting the fallback path when the article is missing
//! 3. **Export**: Generate the HTML page
//!
//! A failed article load is not an error at the pipeline level: the
//! page ships with the fallback notice instead, matching the renderer's
//! contract that nothing on this path is fatal.

use crate::article_model::{self, ArticleDocument};
use crate::comment_model::{self, CommentBoard, CommentError, DraftLoadError};
use crate::content_renderer::EscapeMode;
use crate::html_exporter::{self, HtmlExportError};
use crate::page_model::PageModel;
use crate::site_config::{SiteConfig, SiteConfigError, Theme};
use crate::storage::Storage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the site configuration in the input directory
pub const CONFIG_FILE: &str = "blog.toml";

/// File name of the article content document in the input directory
pub const ARTICLE_FILE: &str = "article.json";

/// Storage file holding opportunistic preferences, relative to the root
const STORAGE_FILE: &str = ".staticle/storage.json";

/// Storage key under which the theme preference is remembered
pub const THEME_KEY: &str = "theme";

/// Errors that can occur while running the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to load {path}: {source}", path = .path.display())]
    ConfigError {
        path: PathBuf,
        #[source]
        source: SiteConfigError,
    },

    #[error(transparent)]
    DraftError(#[from] DraftLoadError),

    #[error(transparent)]
    ExportError(#[from] HtmlExportError),
}

/// Everything loaded from the input directory (Stage 1)
#[derive(Debug)]
pub struct SourceBundle {
    /// Root directory of the site source
    pub root: PathBuf,

    /// Site configuration from blog.toml
    pub config: SiteConfig,

    /// The content document; `None` marks the fallback path
    pub article: Option<ArticleDocument>,

    /// Comment board with the accepted submissions
    pub board: CommentBoard,

    /// Submissions rejected by validation: draft index and reason
    pub rejected: Vec<(usize, CommentError)>,
}

/// Stage 1: load all sources
///
/// # Parameters
/// * `root` - Directory containing blog.toml and article.json
/// * `comments` - Optional JSON file of comment submissions
///
/// # Returns
/// * `Ok(SourceBundle)` - Loaded sources; a missing or malformed
///   article document is recorded on the bundle, not an error
/// * `Err(PipelineError)` - The configuration or the comments file
///   could not be read
pub fn load_sources(root: &Path, comments: Option<&Path>) -> Result<SourceBundle, PipelineError> {
    let config_path = root.join(CONFIG_FILE);
    let config = SiteConfig::load(&config_path).map_err(|e| PipelineError::ConfigError {
        path: config_path,
        source: e,
    })?;

    // The article load failure path is the fallback render, never an abort
    let article_path = root.join(ARTICLE_FILE);
    let article = match article_model::load_document(&article_path) {
        Ok(document) => Some(document),
        Err(e) => {
            log::error!("Error loading article content: {}", e);
            None
        }
    };

    let mut board = CommentBoard::new();
    let mut rejected = Vec::new();
    if let Some(path) = comments {
        for (index, draft) in comment_model::load_drafts(path)?.into_iter().enumerate() {
            if let Err(e) = board.submit(draft) {
                log::warn!("Rejected comment submission {}: {}", index + 1, e);
                rejected.push((index, e));
            }
        }
    }

    Ok(SourceBundle {
        root: root.to_path_buf(),
        config,
        article,
        board,
        rejected,
    })
}

/// Stage 2: assemble the page model
///
/// Resolves the theme in precedence order: explicit override, stored
/// preference, configuration default. An explicit override is
/// remembered opportunistically for the next build.
pub fn assemble(bundle: SourceBundle, theme_override: Option<Theme>) -> PageModel {
    let storage = Storage::new(bundle.root.join(STORAGE_FILE));

    let theme = theme_override
        .or_else(|| storage.get(THEME_KEY))
        .unwrap_or(bundle.config.default_theme);

    if let Some(chosen) = theme_override {
        storage.set(THEME_KEY, &chosen, None);
    }

    PageModel {
        config: bundle.config,
        article: bundle.article,
        comments: bundle.board.into_comments(),
        theme,
    }
}

/// Stage 3: export the page to an HTML file
pub fn export(page: &PageModel, output: &Path, mode: EscapeMode) -> Result<(), PipelineError> {
    html_exporter::to_html(page, output, mode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_config::Person;
    use std::fs;

    fn temp_site(name: &str) -> PathBuf {
        let root = std::env::temp_dir()
            .join("staticle-tests")
            .join(format!("site-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();

        let config = SiteConfig {
            site_title: "The Prompt Report".to_string(),
            tagline: None,
            description: None,
            base_url: "https://example.com".to_string(),
            author: Person {
                name: "Jordan Blake".to_string(),
                email: "jordan@example.com".to_string(),
            },
            default_theme: Theme::Light,
            share_text: None,
        };
        config.save(root.join(CONFIG_FILE)).unwrap();
        root
    }

    #[test]
    fn test_missing_article_selects_fallback_path() {
        let root = temp_site("no-article");
        let bundle = load_sources(&root, None).unwrap();
        assert!(bundle.article.is_none());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_malformed_article_selects_fallback_path() {
        let root = temp_site("bad-article");
        fs::write(root.join(ARTICLE_FILE), "{broken").unwrap();
        let bundle = load_sources(&root, None).unwrap();
        assert!(bundle.article.is_none());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let root = std::env::temp_dir().join("staticle-tests").join("no-config");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        assert!(matches!(
            load_sources(&root, None),
            Err(PipelineError::ConfigError { .. })
        ));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_rejected_drafts_do_not_reach_the_board() {
        let root = temp_site("drafts");
        fs::write(root.join(ARTICLE_FILE), r#"{"sections": []}"#).unwrap();
        let drafts_path = root.join("comments.json");
        fs::write(
            &drafts_path,
            r#"[
                {"name": "Sarah", "email": "sarah@example.com", "content": "Great article, thanks!"},
                {"name": "Eve", "email": "eve@example.com", "content": "too short"}
            ]"#,
        )
        .unwrap();

        let bundle = load_sources(&root, Some(&drafts_path)).unwrap();
        assert_eq!(bundle.board.len(), 1);
        assert_eq!(bundle.rejected.len(), 1);
        assert_eq!(bundle.rejected[0].0, 1);
        assert_eq!(bundle.rejected[0].1, CommentError::TooShort { len: 9 });
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_theme_override_wins_and_is_remembered() {
        let root = temp_site("theme");
        let bundle = load_sources(&root, None).unwrap();
        let page = assemble(bundle, Some(Theme::Dark));
        assert_eq!(page.theme, Theme::Dark);

        // Next build without an override picks up the stored choice
        let bundle = load_sources(&root, None).unwrap();
        let page = assemble(bundle, None);
        assert_eq!(page.theme, Theme::Dark);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_theme_defaults_to_config() {
        let root = temp_site("theme-default");
        let bundle = load_sources(&root, None).unwrap();
        let page = assemble(bundle, None);
        assert_eq!(page.theme, Theme::Light);
        let _ = fs::remove_dir_all(&root);
    }
}
