//! HTML exporter for assembled article pages
//!
//! This module exports a PageModel to a single self-contained HTML file:
//! - head metadata (title, description, Open Graph and Twitter tags)
//! - the rendered article body, or the fallback notice
//! - share links, the comment form, and rendered comment cards
//! - one embedded stylesheet, themed via a data-theme attribute

use crate::content_renderer::{self, escape_html, EscapeMode};
use crate::page_model::PageModel;
use crate::share;
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during HTML export
#[derive(Error, Debug)]
pub enum HtmlExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Export an assembled page to an HTML file
///
/// # Parameters
/// * `page` - The assembled page model to export
/// * `output_path` - Path where the HTML file will be written
/// * `mode` - Escaping policy for article section content
///
/// # Returns
/// * `Ok(())` - Successfully exported to HTML
/// * `Err(HtmlExportError)` - Error during export
pub fn to_html(page: &PageModel, output_path: &Path, mode: EscapeMode) -> Result<(), HtmlExportError> {
    let output = render_page(page, mode);

    // Write to file - create parent directories if they don't exist
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(output_path)?;
    file.write_all(output.as_bytes())?;

    Ok(())
}

/// Render the complete page markup
pub fn render_page(page: &PageModel, mode: EscapeMode) -> String {
    let mut output = String::new();

    write_head(&mut output, page);

    output.push_str("<body>\n");
    // Skip link first so it is the first tab stop
    output.push_str("<a class=\"skip-link\" href=\"#blogContent\">Skip to main content</a>\n");

    write_header(&mut output, page);

    output.push_str("<main id=\"main-content\">\n");
    write_article(&mut output, page, mode);
    write_share_section(&mut output, page);
    write_comments_section(&mut output, page);
    output.push_str("</main>\n");

    write_footer(&mut output, page);

    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}

/// Write the head with title, meta tags, and the embedded stylesheet
fn write_head(output: &mut String, page: &PageModel) {
    let title = page.page_title();

    output.push_str("<!DOCTYPE html>\n");
    output.push_str(&format!(
        "<html lang=\"en\" data-theme=\"{}\">\n",
        page.theme.as_str()
    ));
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(&title)));

    if let Some(description) = page.meta_description() {
        output.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    output.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_html(&page.config.base_url)
    ));

    // Open Graph and Twitter card tags
    output.push_str(&format!(
        "<meta property=\"og:title\" content=\"{}\">\n",
        escape_html(&title)
    ));
    output.push_str("<meta property=\"og:type\" content=\"article\">\n");
    output.push_str(&format!(
        "<meta property=\"og:url\" content=\"{}\">\n",
        escape_html(&page.config.base_url)
    ));
    if let Some(description) = page.meta_description() {
        output.push_str(&format!(
            "<meta property=\"og:description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    output.push_str("<meta name=\"twitter:card\" content=\"summary\">\n");
    output.push_str(&format!(
        "<meta name=\"twitter:title\" content=\"{}\">\n",
        escape_html(&title)
    ));

    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// Write the site header and nav strip
fn write_header(output: &mut String, page: &PageModel) {
    output.push_str("<header class=\"site-header\">\n");
    output.push_str(&format!(
        "<span class=\"site-title\">{}</span>\n",
        escape_html(&page.config.site_title)
    ));
    if let Some(ref tagline) = page.config.tagline {
        output.push_str(&format!(
            "<span class=\"site-tagline\">{}</span>\n",
            escape_html(tagline)
        ));
    }
    output.push_str("<nav class=\"site-nav\">\n");
    output.push_str("<a class=\"nav-link\" href=\"#blogContent\">Article</a>\n");
    output.push_str("<a class=\"nav-link\" href=\"#share\">Share</a>\n");
    output.push_str("<a class=\"nav-link\" href=\"#comments\">Comments</a>\n");
    output.push_str("</nav>\n");
    output.push_str("</header>\n");
}

/// Write the article container with rendered sections or the fallback
fn write_article(output: &mut String, page: &PageModel, mode: EscapeMode) {
    output.push_str("<article class=\"article\">\n");

    if let Some(ref article) = page.article {
        if let Some(ref title) = article.title {
            // Title comes from the content document, so it follows the
            // same escaping policy as the sections
            let title = match mode {
                EscapeMode::TrustContent => title.clone(),
                EscapeMode::EscapeAll => escape_html(title),
            };
            output.push_str(&format!("<h1 class=\"article-title\">{}</h1>\n", title));
        }
        output.push_str(&format!(
            "<p class=\"article-meta\">{} min read \u{00B7} {} words</p>\n",
            article.reading_time_minutes(),
            article.word_count()
        ));
        output.push_str("<div id=\"blogContent\" class=\"article-content\">\n");
        output.push_str(&content_renderer::render_sections(&article.sections, mode));
        output.push_str("</div>\n");
    } else {
        output.push_str("<div id=\"blogContent\" class=\"article-content\">\n");
        output.push_str(&content_renderer::render_fallback());
        output.push_str("</div>\n");
    }

    output.push_str("</article>\n");
}

/// Write the share links
fn write_share_section(output: &mut String, page: &PageModel) {
    let page_url = &page.config.base_url;
    let text = page.share_text();

    output.push_str("<section class=\"social-sharing\" id=\"share\">\n");
    output.push_str("<h3>Share this article</h3>\n");
    output.push_str(&format!(
        "<a class=\"share-btn\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Twitter</a>\n",
        escape_html(&share::twitter_url(page_url, &text))
    ));
    output.push_str(&format!(
        "<a class=\"share-btn\" href=\"{}\" target=\"_blank\" rel=\"noopener\">LinkedIn</a>\n",
        escape_html(&share::linkedin_url(page_url))
    ));
    output.push_str(&format!(
        "<a class=\"share-btn\" href=\"{}\" target=\"_blank\" rel=\"noopener\">WhatsApp</a>\n",
        escape_html(&share::whatsapp_url(page_url, &text))
    ));
    output.push_str("</section>\n");
}

/// Write the comment form and the rendered comment list
fn write_comments_section(output: &mut String, page: &PageModel) {
    output.push_str("<section class=\"comments-section\" id=\"comments\">\n");
    output.push_str(&format!("<h3>Comments ({})</h3>\n", page.comments.len()));

    output.push_str("<form class=\"comment-form\" method=\"post\" action=\"#comments\">\n");
    output.push_str(
        "<label>Name <input type=\"text\" name=\"name\" required></label>\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Comment <textarea name=\"comment\" minlength=\"10\" required></textarea></label>\n\
         <button class=\"submit-btn\" type=\"submit\">Post Comment</button>\n",
    );
    output.push_str("</form>\n");

    output.push_str("<div id=\"commentsList\" class=\"comments-list\">\n");
    output.push_str(&content_renderer::render_comments(&page.comments, Utc::now()));
    output.push_str("</div>\n");
    output.push_str("</section>\n");
}

/// Write the footer with the author credit
fn write_footer(output: &mut String, page: &PageModel) {
    output.push_str("<footer class=\"site-footer\">\n");
    output.push_str(&format!(
        "<p>Written by {} &lt;{}&gt;</p>\n",
        escape_html(&page.config.author.name),
        escape_html(&page.config.author.email)
    ));
    output.push_str("</footer>\n");
}

/// Embedded stylesheet with light and dark themes
const CSS_STYLES: &str = r#"
:root {
    --bg: #f5f5f7;
    --surface: #ffffff;
    --text: #1a1a1a;
    --text-secondary: #555;
    --accent: #3b82f6;
    --border: #e1e4e8;
}

[data-theme="dark"] {
    --bg: #0f172a;
    --surface: #1e293b;
    --text: #e2e8f0;
    --text-secondary: #94a3b8;
    --accent: #60a5fa;
    --border: #334155;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto',
                 'Helvetica Neue', sans-serif;
    line-height: 1.6;
    color: var(--text);
    background-color: var(--bg);
    padding: 20px;
}

.skip-link {
    position: absolute;
    left: -9999px;
}

.skip-link:focus {
    position: static;
    display: inline-block;
    padding: 8px;
    background: var(--accent);
    color: #fff;
}

.site-header {
    max-width: 760px;
    margin: 0 auto 32px;
    display: flex;
    align-items: baseline;
    gap: 16px;
}

.site-title {
    font-size: 1.4em;
    font-weight: 700;
}

.site-tagline {
    color: var(--text-secondary);
}

.site-nav {
    margin-left: auto;
    display: flex;
    gap: 12px;
}

.nav-link {
    color: var(--accent);
    text-decoration: none;
}

main, .site-footer {
    max-width: 760px;
    margin: 0 auto;
}

.article {
    background: var(--surface);
    padding: 40px;
    border-radius: 8px;
    border: 1px solid var(--border);
}

.article-title {
    margin-bottom: 8px;
}

.article-meta {
    color: var(--text-secondary);
    margin-bottom: 24px;
    font-size: 0.9em;
}

.article-content h1, .article-content h2, .article-content h3 {
    margin: 24px 0 12px;
}

.article-content p, .article-content ul, .article-content ol {
    margin-bottom: 16px;
}

.article-content ul, .article-content ol {
    padding-left: 28px;
}

blockquote {
    border-left: 4px solid var(--accent);
    padding-left: 16px;
    margin: 16px 0;
    color: var(--text-secondary);
    font-style: italic;
}

.code-block {
    margin: 16px 0;
    border: 1px solid var(--border);
    border-radius: 6px;
    overflow: hidden;
}

.code-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 6px 12px;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    font-size: 0.85em;
}

.copy-btn {
    border: none;
    background: transparent;
    cursor: pointer;
    color: var(--text-secondary);
}

pre {
    padding: 16px;
    overflow-x: auto;
    background: var(--surface);
}

pre code {
    font-family: 'Menlo', 'Consolas', 'Ubuntu Mono', monospace;
    font-size: 0.9em;
}

.info-box, .example-box {
    margin: 16px 0;
    padding: 16px;
    border-radius: 6px;
    border-left: 4px solid var(--accent);
    background: var(--bg);
}

.info-box h4, .example-box h4 {
    margin-bottom: 8px;
}

.fallback-content {
    text-align: center;
    padding: 48px 16px;
    color: var(--text-secondary);
}

.social-sharing, .comments-section {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 24px 40px;
    margin-top: 24px;
}

.share-btn {
    display: inline-block;
    margin: 8px 8px 0 0;
    padding: 8px 16px;
    border-radius: 6px;
    background: var(--accent);
    color: #fff;
    text-decoration: none;
}

.comment-form label {
    display: block;
    margin-bottom: 12px;
}

.comment-form input, .comment-form textarea {
    display: block;
    width: 100%;
    margin-top: 4px;
    padding: 8px;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--text);
}

.submit-btn {
    padding: 10px 20px;
    border: none;
    border-radius: 6px;
    background: var(--accent);
    color: #fff;
    cursor: pointer;
}

.comments-empty {
    text-align: center;
    padding: 32px;
    color: var(--text-secondary);
}

.comment-item {
    border-top: 1px solid var(--border);
    padding: 16px 0;
}

.comment-header {
    display: flex;
    gap: 12px;
    align-items: center;
    margin-bottom: 8px;
}

.comment-avatar {
    width: 36px;
    height: 36px;
    border-radius: 50%;
    background: var(--accent);
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
}

.comment-name {
    font-weight: 600;
}

.comment-date {
    color: var(--text-secondary);
    font-size: 0.85em;
}

.site-footer {
    margin-top: 32px;
    color: var(--text-secondary);
    text-align: center;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article_model::{ArticleDocument, Section};
    use crate::site_config::{Person, SiteConfig, Theme};

    fn page(article: Option<ArticleDocument>) -> PageModel {
        PageModel {
            config: SiteConfig {
                site_title: "The Prompt Report".to_string(),
                tagline: Some("Notes on AI tools".to_string()),
                description: Some("A blog about prompt engineering".to_string()),
                base_url: "https://example.com/articles/prompting".to_string(),
                author: Person {
                    name: "Jordan Blake".to_string(),
                    email: "jordan@example.com".to_string(),
                },
                default_theme: Theme::Light,
                share_text: None,
            },
            article,
            comments: vec![],
            theme: Theme::Dark,
        }
    }

    #[test]
    fn test_page_has_mount_points() {
        let html = render_page(&page(Some(ArticleDocument::default())), EscapeMode::TrustContent);
        assert!(html.contains("id=\"blogContent\""));
        assert!(html.contains("id=\"commentsList\""));
    }

    #[test]
    fn test_theme_attribute() {
        let html = render_page(&page(None), EscapeMode::TrustContent);
        assert!(html.contains("<html lang=\"en\" data-theme=\"dark\">"));
    }

    #[test]
    fn test_head_metadata() {
        let doc = ArticleDocument {
            title: Some("Prompting 101".to_string()),
            ..Default::default()
        };
        let html = render_page(&page(Some(doc)), EscapeMode::TrustContent);
        assert!(html.contains("<title>Prompting 101 | The Prompt Report</title>"));
        assert!(html.contains("property=\"og:title\""));
        assert!(html.contains("name=\"twitter:card\""));
        assert!(html.contains("content=\"A blog about prompt engineering\""));
    }

    #[test]
    fn test_fallback_page_renders_notice() {
        let html = render_page(&page(None), EscapeMode::TrustContent);
        assert!(html.contains("Article unavailable"));
        assert!(!html.contains("min read"));
    }

    #[test]
    fn test_article_sections_inside_mount() {
        let doc = ArticleDocument {
            sections: vec![Section::Paragraph {
                content: "Hello readers".to_string(),
            }],
            ..Default::default()
        };
        let html = render_page(&page(Some(doc)), EscapeMode::TrustContent);
        let mount = html.find("id=\"blogContent\"").unwrap();
        let body = html.find("<p>Hello readers</p>").unwrap();
        assert!(mount < body);
    }

    #[test]
    fn test_share_links_present() {
        let html = render_page(&page(None), EscapeMode::TrustContent);
        assert!(html.contains("https://twitter.com/intent/tweet?"));
        assert!(html.contains("https://www.linkedin.com/sharing/share-offsite/?"));
        assert!(html.contains("https://wa.me/?"));
    }

    #[test]
    fn test_empty_comments_state() {
        let html = render_page(&page(None), EscapeMode::TrustContent);
        assert!(html.contains("<h3>Comments (0)</h3>"));
        assert!(html.contains("No comments yet"));
    }

    #[test]
    fn test_skip_link_before_header() {
        let html = render_page(&page(None), EscapeMode::TrustContent);
        let skip = html.find("class=\"skip-link\"").unwrap();
        let header = html.find("class=\"site-header\"").unwrap();
        assert!(skip < header);
    }
}
