//! Session comment board
//!
//! Comments live in an in-memory ordered sequence, append-only for the
//! lifetime of the session. Submissions go through the same validation
//! the page form applies: all fields present, a plausible email, and a
//! minimum body length. A rejected submission is a user-visible notice,
//! never a fatal error, and appends nothing.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum accepted comment body length, in characters
pub const MIN_CONTENT_LEN: usize = 10;

/// Validation errors for a comment submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("please fill in all fields (missing {field})")]
    MissingField { field: &'static str },

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("comment must be at least {} characters long (got {len})", MIN_CONTENT_LEN)]
    TooShort { len: usize },
}

/// Errors that can occur while loading a comment submission file
#[derive(Error, Debug)]
pub enum DraftLoadError {
    #[error("failed to read {path}: {source}", path = .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse comment JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// An unvalidated comment submission, as received from the form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentDraft {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub content: String,

    /// Submission time; stamped with the current time when absent
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A published comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub email: String,
    pub content: String,
    /// Creation time, ISO-8601 in serialized form
    pub timestamp: DateTime<Utc>,
}

/// In-memory ordered comment sequence
///
/// Append-only: no edit, no delete, no persistence. Lost when the
/// session ends.
#[derive(Debug, Default)]
pub struct CommentBoard {
    comments: Vec<Comment>,
}

impl CommentBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append it to the board
    ///
    /// # Returns
    /// * `Ok(&Comment)` - The published comment, now last on the board
    /// * `Err(CommentError)` - Validation failed; the board is unchanged
    pub fn submit(&mut self, draft: CommentDraft) -> Result<&Comment, CommentError> {
        validate_draft(&draft)?;

        self.comments.push(Comment {
            name: draft.name,
            email: draft.email,
            content: draft.content,
            timestamp: draft.timestamp.unwrap_or_else(Utc::now),
        });

        Ok(self.comments.last().expect("comment was just appended"))
    }

    /// The published comments, in submission order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of published comments
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// True when no comment has been published yet
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Consume the board, yielding the ordered comment sequence
    pub fn into_comments(self) -> Vec<Comment> {
        self.comments
    }
}

/// Load a JSON array of comment drafts from a file
pub fn load_drafts(path: &Path) -> Result<Vec<CommentDraft>, DraftLoadError> {
    let content = fs::read_to_string(path).map_err(|e| DraftLoadError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(serde_json::from_str(&content)?)
}

/// Apply the form validation rules to a draft
fn validate_draft(draft: &CommentDraft) -> Result<(), CommentError> {
    for (field, value) in [
        ("name", &draft.name),
        ("email", &draft.email),
        ("comment", &draft.content),
    ] {
        if value.trim().is_empty() {
            return Err(CommentError::MissingField { field });
        }
    }

    if !is_valid_email(&draft.email) {
        return Err(CommentError::InvalidEmail);
    }

    let len = draft.content.chars().count();
    if len < MIN_CONTENT_LEN {
        return Err(CommentError::TooShort { len });
    }

    Ok(())
}

/// Email check matching the page form: something@something.something,
/// no whitespace or extra @ signs
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(email)
}
