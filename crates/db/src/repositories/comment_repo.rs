//! Repository for the `movie_comments` table.

use filmvault_core::comment::CommentDraft;
use filmvault_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::MovieComment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, author, message, created_at, updated_at";

/// Provides query and insert operations for movie comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Comments for a movie, newest first, at most `limit` rows.
    pub async fn list_for_movie(
        pool: &PgPool,
        movie_id: DbId,
        limit: i64,
    ) -> Result<Vec<MovieComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie_comments \
             WHERE movie_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, MovieComment>(&query)
            .bind(movie_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Insert a validated comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        draft: &CommentDraft,
    ) -> Result<MovieComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_comments (movie_id, author, message) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieComment>(&query)
            .bind(movie_id)
            .bind(&draft.author)
            .bind(&draft.message)
            .fetch_one(pool)
            .await
    }
}
