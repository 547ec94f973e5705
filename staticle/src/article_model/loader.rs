//! Loading and decoding of the article JSON resource

use super::{ArticleDocument, ArticleError, Section};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Raw document shape before section decoding
///
/// Sections are kept as raw JSON values so that an unrecognized or
/// malformed section can be skipped without failing the whole document.
/// A document without a `sections` key is malformed and does fail.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    description: Option<String>,

    sections: Vec<Value>,
}

/// Load and decode an article document from a JSON file
///
/// # Parameters
/// * `path` - Path to the article JSON resource
///
/// # Returns
/// * `Ok(ArticleDocument)` - Decoded document; unrecognized sections are
///   skipped with a warning, never an error
/// * `Err(ArticleError)` - The file could not be read or is not a valid
///   document shape
pub fn load_document(path: &Path) -> Result<ArticleDocument, ArticleError> {
    let content = fs::read_to_string(path).map_err(|e| ArticleError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_document(&content)
}

/// Decode an article document from a JSON string
pub fn parse_document(json: &str) -> Result<ArticleDocument, ArticleError> {
    let raw: RawDocument = serde_json::from_str(json)?;

    let mut sections = Vec::with_capacity(raw.sections.len());
    let mut skipped_sections = 0;
    for (index, value) in raw.sections.into_iter().enumerate() {
        match serde_json::from_value::<Section>(value) {
            Ok(section) => sections.push(section),
            Err(e) => {
                log::warn!("Skipping section {}: {}", index, e);
                skipped_sections += 1;
            }
        }
    }

    Ok(ArticleDocument {
        title: raw.title,
        description: raw.description,
        sections,
        skipped_sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = parse_document(r#"{"sections": []}"#).unwrap();
        assert!(doc.title.is_none());
        assert!(doc.sections.is_empty());
        assert_eq!(doc.skipped_sections, 0);
    }

    #[test]
    fn test_parse_preserves_section_order() {
        let json = r#"{
            "title": "Prompting 101",
            "sections": [
                {"type": "heading", "level": 2, "content": "First"},
                {"type": "paragraph", "content": "Second"},
                {"type": "quote", "content": "Third"}
            ]
        }"#;
        let doc = parse_document(json).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Prompting 101"));
        assert_eq!(doc.sections.len(), 3);
        assert!(matches!(doc.sections[0], Section::Heading { .. }));
        assert!(matches!(doc.sections[1], Section::Paragraph { .. }));
        assert!(matches!(doc.sections[2], Section::Quote { .. }));
    }

    #[test]
    fn test_unknown_section_type_is_skipped() {
        let json = r#"{
            "sections": [
                {"type": "paragraph", "content": "kept"},
                {"type": "carousel", "images": []},
                {"type": "paragraph", "content": "also kept"}
            ]
        }"#;
        let doc = parse_document(json).unwrap();
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.skipped_sections, 1);
    }

    #[test]
    fn test_malformed_known_section_is_skipped() {
        // A heading without content is dropped, not a document error
        let json = r#"{"sections": [{"type": "heading", "level": 2}]}"#;
        let doc = parse_document(json).unwrap();
        assert!(doc.sections.is_empty());
        assert_eq!(doc.skipped_sections, 1);
    }

    #[test]
    fn test_missing_sections_key_is_an_error() {
        assert!(parse_document(r#"{"title": "No body"}"#).is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse_document("{not json").is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let result = load_document(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ArticleError::IoError { .. })));
    }
}
