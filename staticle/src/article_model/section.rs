//! Typed article sections
//!
//! Each section is one block of article content, tagged by a `type`
//! field in the JSON document. Fields present vary by type.

use serde::Deserialize;

/// One typed block of article content
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Section {
    /// A heading at the given level (1-6, clamped at render time)
    Heading {
        /// Heading level (1 = h1, 2 = h2, etc.)
        level: u8,
        /// Heading text; may carry intentional markup
        content: String,
    },

    /// A paragraph of prose
    Paragraph {
        /// Paragraph text; may carry intentional markup
        content: String,
    },

    /// An ordered or unordered list
    List {
        /// True for a numbered list; absent means unordered
        #[serde(default)]
        ordered: bool,
        /// List items, in order
        items: Vec<String>,
    },

    /// A labeled code block; content is always escaped on render
    Code {
        /// Raw source text
        content: String,
        /// Language label shown in the block header; defaults to "text"
        #[serde(default)]
        language: Option<String>,
    },

    /// A block quote
    Quote {
        /// Quote text; may carry intentional markup
        content: String,
    },

    /// A highlighted informational callout with a title and body
    InfoBox {
        /// Callout title
        title: String,
        /// Callout body
        content: String,
    },

    /// A worked-example callout with a title and body
    Example {
        /// Callout title
        title: String,
        /// Callout body
        content: String,
    },
}

impl Section {
    /// Word count of the visible text in this section
    pub fn word_count(&self) -> usize {
        match self {
            Section::Heading { content, .. }
            | Section::Paragraph { content }
            | Section::Quote { content } => count_words(content),
            Section::List { items, .. } => items.iter().map(|item| count_words(item)).sum(),
            Section::Code { content, .. } => count_words(content),
            Section::InfoBox { title, content } | Section::Example { title, content } => {
                count_words(title) + count_words(content)
            }
        }
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
