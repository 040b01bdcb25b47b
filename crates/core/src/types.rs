use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a movie identifier taken from a URL path segment.
///
/// Identifiers are positive integers. Anything else is rejected before the
/// store is queried.
pub fn parse_movie_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation("Invalid movie id.".into())),
    }
}
