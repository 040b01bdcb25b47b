//! Movie row model.

use filmvault_core::movie_input::{Awards, Imdb, MovieDraft};
use filmvault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Rotten Tomatoes viewer or critic rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TomatoRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_reviews: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter: Option<i32>,
}

/// Rotten Tomatoes block. Present only on imported records; the add-movie
/// form does not set it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tomatoes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<TomatoRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critic: Option<TomatoRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fresh: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotten: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
}

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullplot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[sqlx(rename = "cast_members")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Json<Awards>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<Json<Imdb>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tomatoes: Option<Json<Tomatoes>>,
    pub created_at: Timestamp,
}

impl Movie {
    /// Materialize a draft as a stored row with the given identity.
    pub fn from_draft(id: DbId, draft: &MovieDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            year: draft.year,
            plot: draft.plot.clone(),
            fullplot: draft.fullplot.clone(),
            genres: draft.genres.clone(),
            cast: draft.cast.clone(),
            directors: draft.directors.clone(),
            languages: draft.languages.clone(),
            runtime: draft.runtime,
            poster: draft.poster.clone(),
            released: draft.released,
            awards: draft.awards.clone().map(Json),
            imdb: draft.imdb.clone().map(Json),
            tomatoes: None,
            created_at,
        }
    }

    /// Genre list as a slice, for filter matching.
    pub fn genre_slice(&self) -> Option<&[String]> {
        self.genres.as_deref()
    }
}
