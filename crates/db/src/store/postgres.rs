use async_trait::async_trait;
use filmvault_core::comment::CommentDraft;
use filmvault_core::movie_input::MovieDraft;
use filmvault_core::pagination::{MovieFilter, PageRequest};
use filmvault_core::types::DbId;

use super::{CatalogStore, StoreResult};
use crate::models::comment::MovieComment;
use crate::models::movie::Movie;
use crate::repositories::{CommentRepo, MovieRepo};
use crate::DbPool;

/// [`CatalogStore`] backed by PostgreSQL through the repository layer.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_movies(
        &self,
        filter: &MovieFilter,
        page: &PageRequest,
    ) -> StoreResult<Vec<Movie>> {
        MovieRepo::list(&self.pool, filter, page).await
    }

    async fn count_movies(&self, filter: &MovieFilter) -> StoreResult<i64> {
        MovieRepo::count(&self.pool, filter).await
    }

    async fn distinct_genres(&self) -> StoreResult<Vec<String>> {
        MovieRepo::distinct_genres(&self.pool).await
    }

    async fn find_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    async fn movie_exists(&self, id: DbId) -> StoreResult<bool> {
        MovieRepo::exists(&self.pool, id).await
    }

    async fn insert_movie(&self, draft: &MovieDraft) -> StoreResult<Movie> {
        MovieRepo::create(&self.pool, draft).await
    }

    async fn list_comments(&self, movie_id: DbId, limit: i64) -> StoreResult<Vec<MovieComment>> {
        CommentRepo::list_for_movie(&self.pool, movie_id, limit).await
    }

    async fn insert_comment(
        &self,
        movie_id: DbId,
        draft: &CommentDraft,
    ) -> StoreResult<MovieComment> {
        CommentRepo::create(&self.pool, movie_id, draft).await
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}
