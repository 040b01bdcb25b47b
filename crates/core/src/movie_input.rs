//! Movie creation payloads and their validation.
//!
//! [`MoviePayload`] mirrors the add-movie form: every field is optional and
//! loosely typed. [`MovieDraft::from_payload`] turns it into a normalized
//! record under a sparse-write policy: anything missing or unparseable is
//! left out rather than stored as a null or zero placeholder.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::loose::LooseValue;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Nested groups
// ---------------------------------------------------------------------------

/// Award counts and the free-text award summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Awards {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominations: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Awards {
    /// `None` when no field is set, so empty groups are never stored.
    pub fn non_empty(self) -> Option<Self> {
        (self.wins.is_some() || self.nominations.is_some() || self.text.is_some()).then_some(self)
    }
}

/// IMDb rating, vote count and numeric title id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Imdb {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Imdb {
    /// `None` when no field is set, so empty groups are never stored.
    pub fn non_empty(self) -> Option<Self> {
        (self.rating.is_some() || self.votes.is_some() || self.id.is_some()).then_some(self)
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Raw body of `POST /movie/addMovie`.
///
/// Numbers may arrive as strings and lists as comma-separated text.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub title: Option<LooseValue>,
    pub year: Option<LooseValue>,
    pub runtime: Option<LooseValue>,
    pub genres: Option<LooseValue>,
    pub cast: Option<LooseValue>,
    pub directors: Option<LooseValue>,
    pub languages: Option<LooseValue>,
    pub poster: Option<LooseValue>,
    pub plot: Option<LooseValue>,
    pub fullplot: Option<LooseValue>,
    pub imdb_rating: Option<LooseValue>,
    pub imdb_votes: Option<LooseValue>,
    pub imdb_id: Option<LooseValue>,
    pub released: Option<LooseValue>,
    pub awards_text: Option<LooseValue>,
    pub awards_wins: Option<LooseValue>,
    pub awards_nominations: Option<LooseValue>,
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// A validated movie ready to be inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: Option<i32>,
    pub runtime: Option<i32>,
    pub plot: Option<String>,
    pub fullplot: Option<String>,
    pub poster: Option<String>,
    pub genres: Option<Vec<String>>,
    pub cast: Option<Vec<String>>,
    pub directors: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub released: Option<Timestamp>,
    pub awards: Option<Awards>,
    pub imdb: Option<Imdb>,
}

impl MovieDraft {
    /// Validate and coerce an add-movie payload.
    ///
    /// Fails only when the title is missing, not text, or blank.
    pub fn from_payload(payload: &MoviePayload) -> Result<Self, CoreError> {
        let title = payload
            .title
            .as_ref()
            .and_then(LooseValue::as_text)
            .ok_or_else(|| CoreError::Validation("Title is required.".into()))?;

        let imdb = Imdb {
            rating: number(&payload.imdb_rating),
            votes: int64(&payload.imdb_votes),
            id: int64(&payload.imdb_id),
        };
        let awards = Awards {
            wins: int32(&payload.awards_wins),
            nominations: int32(&payload.awards_nominations),
            text: text(&payload.awards_text),
        };

        Ok(Self {
            title: title.to_string(),
            year: int32(&payload.year),
            runtime: int32(&payload.runtime),
            plot: text(&payload.plot),
            fullplot: text(&payload.fullplot),
            poster: text(&payload.poster),
            genres: list(&payload.genres),
            cast: list(&payload.cast),
            directors: list(&payload.directors),
            languages: list(&payload.languages),
            released: payload.released.as_ref().and_then(LooseValue::as_timestamp),
            awards: awards.non_empty(),
            imdb: imdb.non_empty(),
        })
    }
}

fn number(value: &Option<LooseValue>) -> Option<f64> {
    value.as_ref().and_then(LooseValue::as_number)
}

fn int32(value: &Option<LooseValue>) -> Option<i32> {
    value.as_ref().and_then(LooseValue::as_i32)
}

fn int64(value: &Option<LooseValue>) -> Option<i64> {
    value.as_ref().and_then(LooseValue::as_i64)
}

fn text(value: &Option<LooseValue>) -> Option<String> {
    value.as_ref().and_then(LooseValue::as_text).map(str::to_string)
}

fn list(value: &Option<LooseValue>) -> Option<Vec<String>> {
    value.as_ref().and_then(LooseValue::as_string_list)
}
