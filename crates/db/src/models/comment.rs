//! Movie comment row model.

use filmvault_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movie_comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieComment {
    pub id: DbId,
    /// Weak reference to `movies.id`; not a foreign key.
    pub movie_id: DbId,
    pub author: String,
    pub message: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
