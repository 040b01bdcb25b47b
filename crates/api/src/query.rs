//! Query parameter types for API handlers.

use serde::Deserialize;

/// Raw `?genre=&page=&limit=` parameters for the movie list.
///
/// Kept as text so malformed numbers fall back to defaults during
/// normalization instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub genre: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}
