//! Error types for article document loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the article content document
///
/// Neither variant is fatal to a build: the pipeline catches them and
/// renders the fallback notice instead.
#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("failed to read {path}: {source}", path = .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse article JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
