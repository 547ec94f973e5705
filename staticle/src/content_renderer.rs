//! Content renderer: typed sections and comment cards to markup
//!
//! This is the core mapping from the ordered section list to HTML
//! fragments, plus the comment-card renderer and the fallback notice
//! used when the content document cannot be loaded. The renderer is a
//! pure function of its inputs; it touches no files and no clock (the
//! comment renderer takes `now` explicitly).

use crate::article_model::Section;
use crate::comment_model::Comment;
use crate::dates::format_comment_date;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use itertools::Itertools;
use std::borrow::Cow;

/// Escaping policy for section content
///
/// The document format historically trusts its JSON source: headings,
/// paragraphs, lists, quotes, and callouts may carry intentional
/// markup and are inserted verbatim. That is a content-authoring
/// assumption, not a security boundary. Code content is escaped under
/// every mode, and comment fields are always escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EscapeMode {
    /// Insert non-code section content verbatim (the historical contract)
    #[default]
    TrustContent,
    /// Escape every text field
    EscapeAll,
}

/// Render the ordered section list to a single markup string
///
/// Produces exactly one fragment per section, in input order.
/// Unrecognized sections never reach this function; they are dropped
/// during document decoding.
pub fn render_sections(sections: &[Section], mode: EscapeMode) -> String {
    let mut output = String::new();
    for section in sections {
        render_section(&mut output, section, mode);
    }
    output
}

/// Render a single section fragment
fn render_section(output: &mut String, section: &Section, mode: EscapeMode) {
    match section {
        Section::Heading { level, content } => {
            let level = (*level).clamp(1, 6);
            output.push_str(&format!(
                "<h{}>{}</h{}>\n",
                level,
                text(content, mode),
                level
            ));
        }

        Section::Paragraph { content } => {
            output.push_str(&format!("<p>{}</p>\n", text(content, mode)));
        }

        Section::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            output.push_str(&format!("<{}>\n", tag));
            for item in items {
                output.push_str(&format!("<li>{}</li>\n", text(item, mode)));
            }
            output.push_str(&format!("</{}>\n", tag));
        }

        Section::Code { content, language } => {
            let language = language.as_deref().unwrap_or("text");
            output.push_str("<div class=\"code-block\">\n");
            output.push_str(&format!(
                "<div class=\"code-header\"><span class=\"code-language\">{}</span><button class=\"copy-btn\" type=\"button\">\u{1F4CB} Copy</button></div>\n",
                escape_html(language)
            ));
            output.push_str(&format!(
                "<pre><code>{}</code></pre>\n",
                escape_html(content)
            ));
            output.push_str("</div>\n");
        }

        Section::Quote { content } => {
            output.push_str(&format!("<blockquote>{}</blockquote>\n", text(content, mode)));
        }

        Section::InfoBox { title, content } => {
            render_callout(output, "info-box", "\u{1F4A1}", title, content, mode);
        }

        Section::Example { title, content } => {
            render_callout(output, "example-box", "\u{1F3AF}", title, content, mode);
        }
    }
}

/// Titled callout card with icon prefix, title, and body
fn render_callout(
    output: &mut String,
    class: &str,
    icon: &str,
    title: &str,
    content: &str,
    mode: EscapeMode,
) {
    output.push_str(&format!(
        "<div class=\"{}\">\n<h4>{} {}</h4>\n<p>{}</p>\n</div>\n",
        class,
        icon,
        text(title, mode),
        text(content, mode)
    ));
}

/// Static notice rendered when the content document cannot be loaded
pub fn render_fallback() -> String {
    String::from(
        "<div class=\"fallback-content\">\n\
         <h2>Article unavailable</h2>\n\
         <p>The article content could not be loaded. Please check back later.</p>\n\
         </div>\n",
    )
}

/// Render the comment list, or the empty-state placeholder
///
/// Every re-render is a full replace: the caller swaps the whole
/// comments container contents for this string.
pub fn render_comments(comments: &[Comment], now: DateTime<Utc>) -> String {
    if comments.is_empty() {
        return String::from(
            "<div class=\"comments-empty\">\n\
             <p>\u{1F4AC} No comments yet</p>\n\
             <p>Be the first to share your thoughts!</p>\n\
             </div>\n",
        );
    }

    comments
        .iter()
        .map(|comment| render_comment_card(comment, now))
        .join("")
}

/// One comment card: avatar glyph, name, bucketed date, escaped body
fn render_comment_card(comment: &Comment, now: DateTime<Utc>) -> String {
    let initial: String = comment
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();

    format!(
        "<div class=\"comment-item\">\n\
         <div class=\"comment-header\">\n\
         <div class=\"comment-avatar\">{}</div>\n\
         <div class=\"comment-meta\">\n\
         <div class=\"comment-name\">{}</div>\n\
         <div class=\"comment-date\">{}</div>\n\
         </div>\n\
         </div>\n\
         <div class=\"comment-content\">{}</div>\n\
         </div>\n",
        escape_html(&initial),
        escape_html(&comment.name),
        format_comment_date(comment.timestamp, now),
        escape_html(&comment.content),
    )
}

/// Apply the escaping policy to non-code section text
fn text<'a>(content: &'a str, mode: EscapeMode) -> Cow<'a, str> {
    match mode {
        EscapeMode::TrustContent => Cow::Borrowed(content),
        EscapeMode::EscapeAll => Cow::Owned(escape_html(content)),
    }
}

/// Escape HTML special characters (five-entity substitution)
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_heading_levels_clamped() {
        let sections = vec![Section::Heading {
            level: 9,
            content: "Deep".to_string(),
        }];
        let html = render_sections(&sections, EscapeMode::TrustContent);
        assert_eq!(html, "<h6>Deep</h6>\n");
    }

    #[test]
    fn test_one_fragment_per_section_in_order() {
        let sections = vec![
            Section::Heading {
                level: 2,
                content: "Intro".to_string(),
            },
            Section::Paragraph {
                content: "Welcome".to_string(),
            },
            Section::Quote {
                content: "Wise words".to_string(),
            },
        ];
        let html = render_sections(&sections, EscapeMode::TrustContent);
        let heading = html.find("<h2>Intro</h2>").unwrap();
        let paragraph = html.find("<p>Welcome</p>").unwrap();
        let quote = html.find("<blockquote>Wise words</blockquote>").unwrap();
        assert!(heading < paragraph);
        assert!(paragraph < quote);
    }

    #[test]
    fn test_trusted_content_kept_verbatim() {
        let sections = vec![Section::Paragraph {
            content: "Use <strong>bold</strong> text".to_string(),
        }];
        let html = render_sections(&sections, EscapeMode::TrustContent);
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_escape_all_escapes_paragraphs() {
        let sections = vec![Section::Paragraph {
            content: "<b>hi</b>".to_string(),
        }];
        let html = render_sections(&sections, EscapeMode::EscapeAll);
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("<b>hi</b>"));
    }

    #[test]
    fn test_ordered_and_unordered_lists() {
        let ordered = vec![Section::List {
            ordered: true,
            items: vec!["first".to_string(), "second".to_string()],
        }];
        let html = render_sections(&ordered, EscapeMode::TrustContent);
        assert!(html.starts_with("<ol>"));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("</ol>"));

        let unordered = vec![Section::List {
            ordered: false,
            items: vec!["only".to_string()],
        }];
        let html = render_sections(&unordered, EscapeMode::TrustContent);
        assert!(html.starts_with("<ul>"));
    }

    #[test]
    fn test_code_content_always_escaped() {
        let sections = vec![Section::Code {
            content: "<script>alert(1)</script>".to_string(),
            language: Some("js".to_string()),
        }];
        for mode in [EscapeMode::TrustContent, EscapeMode::EscapeAll] {
            let html = render_sections(&sections, mode);
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
            assert!(!html.contains("<script>"));
        }
    }

    #[test]
    fn test_code_language_defaults_to_text() {
        let sections = vec![Section::Code {
            content: "x = 1".to_string(),
            language: None,
        }];
        let html = render_sections(&sections, EscapeMode::TrustContent);
        assert!(html.contains("<span class=\"code-language\">text</span>"));
        assert!(html.contains("Copy"));
    }

    #[test]
    fn test_callout_markup() {
        let sections = vec![Section::InfoBox {
            title: "Pro Tip".to_string(),
            content: "Iterate on your prompts".to_string(),
        }];
        let html = render_sections(&sections, EscapeMode::TrustContent);
        assert!(html.contains("<div class=\"info-box\">"));
        assert!(html.contains("\u{1F4A1} Pro Tip"));
        assert!(html.contains("<p>Iterate on your prompts</p>"));
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(render_sections(&[], EscapeMode::TrustContent), "");
    }

    #[test]
    fn test_fallback_notice() {
        let html = render_fallback();
        assert!(html.contains("Article unavailable"));
    }

    #[test]
    fn test_zero_comments_empty_state() {
        let html = render_comments(&[], Utc::now());
        assert!(html.contains("No comments yet"));
        assert!(!html.contains("comment-item"));
    }

    #[test]
    fn test_comment_card_fields() {
        let now = Utc::now();
        let comments = vec![Comment {
            name: "sarah".to_string(),
            email: "sarah@example.com".to_string(),
            content: "Great article! <3".to_string(),
            timestamp: now - chrono::Duration::days(1),
        }];
        let html = render_comments(&comments, now);
        assert!(html.contains("<div class=\"comment-avatar\">S</div>"));
        assert!(html.contains("<div class=\"comment-name\">sarah</div>"));
        assert!(html.contains("Yesterday"));
        assert!(html.contains("Great article! &lt;3"));
    }

    #[test]
    fn test_comment_body_escaped() {
        let now = Utc::now();
        let comments = vec![Comment {
            name: "Mallory".to_string(),
            email: "m@example.com".to_string(),
            content: "<img src=x onerror=alert(1)>".to_string(),
            timestamp: now,
        }];
        let html = render_comments(&comments, now);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
