//! Article content document model
//!
//! This module defines the structures parsed from the article JSON
//! resource: an ordered list of typed sections plus optional page-level
//! metadata (title, description) used for the head tags.

// Submodules
mod error;
mod loader;
mod section;

// Re-export public types
pub use error::ArticleError;
pub use loader::{load_document, parse_document};
pub use section::Section;

/// Words-per-minute rate used for the reading time estimate
const READING_WPM: usize = 200;

/// A parsed article content document
///
/// Rendering is a pure function of this structure: section order is
/// preserved, and no section refers to or mutates another.
#[derive(Debug, Clone, Default)]
pub struct ArticleDocument {
    /// Article title, used for the page title and social meta tags
    pub title: Option<String>,

    /// Short description for the meta description and share cards
    pub description: Option<String>,

    /// Ordered content sections
    pub sections: Vec<Section>,

    /// Number of sections dropped during decoding (unrecognized type or
    /// malformed fields); reported by `validate`, never an error
    pub skipped_sections: usize,
}

impl ArticleDocument {
    /// Total word count across all sections
    pub fn word_count(&self) -> usize {
        self.sections.iter().map(|s| s.word_count()).sum()
    }

    /// Estimated reading time in whole minutes (always at least 1)
    pub fn reading_time_minutes(&self) -> usize {
        self.word_count().div_ceil(READING_WPM).max(1)
    }
}
