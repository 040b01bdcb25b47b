//! Storage seam for the catalog.
//!
//! Handlers hold an `Arc<dyn CatalogStore>` so the same router runs against
//! PostgreSQL in production and against process memory in development and
//! tests. The trait exposes only the narrow operations the catalog needs.

use async_trait::async_trait;
use filmvault_core::comment::CommentDraft;
use filmvault_core::movie_input::MovieDraft;
use filmvault_core::pagination::{normalize_genres, MovieFilter, MovieQuery, PageRequest};
use filmvault_core::types::DbId;

use crate::models::comment::MovieComment;
use crate::models::movie::Movie;

mod memory;
mod postgres;

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Store operations report failures as `sqlx::Error`; the in-memory backend
/// never fails.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Persistence operations used by the catalog handlers.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// One page of movies matching `filter`, newest first.
    async fn list_movies(
        &self,
        filter: &MovieFilter,
        page: &PageRequest,
    ) -> StoreResult<Vec<Movie>>;

    /// Number of movies matching `filter`.
    async fn count_movies(&self, filter: &MovieFilter) -> StoreResult<i64>;

    /// Every genre value present on any movie. Order and duplicates are
    /// unspecified.
    async fn distinct_genres(&self) -> StoreResult<Vec<String>>;

    async fn find_movie(&self, id: DbId) -> StoreResult<Option<Movie>>;

    async fn movie_exists(&self, id: DbId) -> StoreResult<bool>;

    /// Persist a validated movie and return it with its assigned id.
    async fn insert_movie(&self, draft: &MovieDraft) -> StoreResult<Movie>;

    /// Comments for a movie, newest first, at most `limit`.
    async fn list_comments(&self, movie_id: DbId, limit: i64) -> StoreResult<Vec<MovieComment>>;

    /// Persist a validated comment. The caller checks that the movie exists.
    async fn insert_comment(
        &self,
        movie_id: DbId,
        draft: &CommentDraft,
    ) -> StoreResult<MovieComment>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

/// A page of movies together with the total number of matches.
#[derive(Debug, Clone)]
pub struct MoviePageResult {
    pub items: Vec<Movie>,
    pub total: i64,
}

/// Fetch a page and the total match count concurrently.
///
/// Both queries are read-only; the result is assembled once both complete.
pub async fn fetch_movie_page(
    store: &dyn CatalogStore,
    query: &MovieQuery,
) -> StoreResult<MoviePageResult> {
    let (items, total) = tokio::try_join!(
        store.list_movies(&query.filter, &query.page),
        store.count_movies(&query.filter),
    )?;
    Ok(MoviePageResult { items, total })
}

/// Distinct non-blank genres, sorted ascending.
pub async fn sorted_genres(store: &dyn CatalogStore) -> StoreResult<Vec<String>> {
    let genres = store.distinct_genres().await?;
    Ok(normalize_genres(genres))
}
