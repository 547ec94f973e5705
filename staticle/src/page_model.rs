//! Assembled page model ready for export
//!
//! Output of the assembly stage: everything the HTML exporter needs in
//! one place, with the theme preference already resolved. An absent
//! article marks the fallback path; the page is still produced.

use crate::article_model::ArticleDocument;
use crate::comment_model::Comment;
use crate::site_config::SiteConfig;
use crate::site_config::Theme;

/// The assembled article page, ready for export
#[derive(Debug)]
pub struct PageModel {
    /// Site-level settings
    pub config: SiteConfig,

    /// The content document, or `None` when loading failed and the
    /// fallback notice takes its place
    pub article: Option<ArticleDocument>,

    /// Accepted comments, in submission order
    pub comments: Vec<Comment>,

    /// Resolved theme (override, stored preference, or config default)
    pub theme: Theme,
}

impl PageModel {
    /// Page title: "<article> | <site>" when the article names one,
    /// otherwise the site title alone
    pub fn page_title(&self) -> String {
        match self.article.as_ref().and_then(|a| a.title.as_deref()) {
            Some(title) => format!("{} | {}", title, self.config.site_title),
            None => self.config.site_title.clone(),
        }
    }

    /// Meta description: the article's, falling back to the site's
    pub fn meta_description(&self) -> Option<&str> {
        self.article
            .as_ref()
            .and_then(|a| a.description.as_deref())
            .or(self.config.description.as_deref())
    }

    /// Text for the share intents
    pub fn share_text(&self) -> String {
        self.config
            .share_text
            .clone()
            .unwrap_or_else(|| self.page_title())
    }
}
