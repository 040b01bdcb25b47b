//! Movie list query normalization.
//!
//! Query string values arrive as untyped text. Everything here is
//! permissive: malformed or missing values fall back to defaults and never
//! produce an error.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page used when the request does not name a usable one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request does not name a usable one.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 50;

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// A bounded page selection ready for a skip/limit query.
///
/// Invariants: `page >= 1` and `1 <= page_size <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Clamp raw `page` / `limit` query values into a valid page request.
    pub fn normalize(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_lenient_int(page).unwrap_or(DEFAULT_PAGE).max(1);
        let page_size = parse_lenient_int(limit)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        Self { page, page_size }
    }

    /// Number of rows to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of rows to fetch for this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Total page count for `total` matching rows. Never less than 1.
    ///
    /// A hand-built request with a non-positive page size counts as size 1.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 1;
        }
        let size = self.page_size.max(1);
        let full = total / size;
        let partial = i64::from(total % size != 0);
        (full + partial).max(1)
    }
}

/// Parse a query value as an integer, truncating finite decimals.
///
/// Blank, non-numeric and zero values yield `None` so the caller's default
/// applies.
fn parse_lenient_int(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let value = match raw.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let f = raw.parse::<f64>().ok().filter(|f| f.is_finite())?;
            f.trunc() as i64
        }
    };
    (value != 0).then_some(value)
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Predicate for movie list queries. Currently genre equality only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Matches movies whose genre list contains this exact value.
    pub genre: Option<String>,
}

impl MovieFilter {
    /// Build a filter from the raw `genre` query value.
    pub fn from_genre(raw: Option<&str>) -> Self {
        let genre = raw
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string);
        Self { genre }
    }

    /// Whether a movie with the given genres satisfies this filter.
    pub fn matches(&self, genres: Option<&[String]>) -> bool {
        match &self.genre {
            None => true,
            Some(wanted) => genres.is_some_and(|gs| gs.iter().any(|g| g == wanted)),
        }
    }
}

/// A fully normalized movie list query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub filter: MovieFilter,
    pub page: PageRequest,
}

impl MovieQuery {
    /// Normalize raw `genre`, `page` and `limit` query values.
    pub fn from_raw(genre: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            filter: MovieFilter::from_genre(genre),
            page: PageRequest::normalize(page, limit),
        }
    }
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

/// Drop blank genres, then sort ascending (case-sensitive) and deduplicate.
pub fn normalize_genres(genres: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = genres
        .into_iter()
        .filter(|g| !g.trim().is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
