//! Comment input rules.
//!
//! Oversized input is truncated, not rejected. Only a blank message is an
//! error.

use serde::Deserialize;

use crate::error::CoreError;
use crate::loose::LooseValue;

/// Maximum author length, in characters.
pub const MAX_AUTHOR_CHARS: usize = 40;

/// Maximum message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 600;

/// Author recorded when none is given.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Most comments returned for a single movie.
pub const MAX_COMMENTS_PER_MOVIE: i64 = 200;

/// Raw body of `POST /movie/{movie_id}/comments`.
///
/// Non-text values are accepted here and treated as blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPayload {
    pub author: Option<LooseValue>,
    pub message: Option<LooseValue>,
}

/// A validated comment ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub author: String,
    pub message: String,
}

impl CommentDraft {
    /// Trim, default and truncate a comment payload.
    ///
    /// Fails when the message is missing or blank after trimming.
    pub fn from_payload(payload: &CommentPayload) -> Result<Self, CoreError> {
        let message = payload
            .message
            .as_ref()
            .and_then(LooseValue::as_text)
            .ok_or_else(|| CoreError::Validation("Comment message is required.".into()))?;

        let author = payload
            .author
            .as_ref()
            .and_then(LooseValue::as_text)
            .unwrap_or(DEFAULT_AUTHOR);

        Ok(Self {
            author: truncate_chars(author, MAX_AUTHOR_CHARS),
            message: truncate_chars(message, MAX_MESSAGE_CHARS),
        })
    }
}

/// Keep at most `max` characters of `s`.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
