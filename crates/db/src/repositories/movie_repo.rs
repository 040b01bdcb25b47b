//! Repository for the `movies` table.

use filmvault_core::movie_input::MovieDraft;
use filmvault_core::pagination::{MovieFilter, PageRequest};
use filmvault_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, year, plot, fullplot, genres, cast_members, directors, languages, \
    runtime, poster, released, awards, imdb, tomatoes, created_at";

/// Genre predicate. `$1` is NULL when the query is unfiltered.
const GENRE_PREDICATE: &str = "($1::TEXT IS NULL OR genres @> ARRAY[$1::TEXT])";

/// Provides query and insert operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// One page of movies matching `filter`, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &MovieFilter,
        page: &PageRequest,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE {GENRE_PREDICATE} \
             ORDER BY id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(filter.genre.as_deref())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all movies matching `filter`.
    pub async fn count(pool: &PgPool, filter: &MovieFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM movies WHERE {GENRE_PREDICATE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.genre.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Every distinct genre value across all movies, unsorted.
    pub async fn distinct_genres(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT g FROM movies, unnest(genres) AS g WHERE g IS NOT NULL",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a movie with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a validated movie, returning the created row.
    pub async fn create(pool: &PgPool, draft: &MovieDraft) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies \
                 (title, year, plot, fullplot, genres, cast_members, directors, languages, \
                  runtime, poster, released, awards, imdb) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&draft.title)
            .bind(draft.year)
            .bind(&draft.plot)
            .bind(&draft.fullplot)
            .bind(&draft.genres)
            .bind(&draft.cast)
            .bind(&draft.directors)
            .bind(&draft.languages)
            .bind(draft.runtime)
            .bind(&draft.poster)
            .bind(draft.released)
            .bind(draft.awards.as_ref().map(Json))
            .bind(draft.imdb.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }
}
