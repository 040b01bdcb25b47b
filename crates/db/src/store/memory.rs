use std::collections::BTreeMap;

use async_trait::async_trait;
use filmvault_core::comment::CommentDraft;
use filmvault_core::movie_input::MovieDraft;
use filmvault_core::pagination::{MovieFilter, PageRequest};
use filmvault_core::types::DbId;
use tokio::sync::RwLock;

use super::{CatalogStore, StoreResult};
use crate::models::comment::MovieComment;
use crate::models::movie::Movie;

/// [`CatalogStore`] kept entirely in process memory.
///
/// Ids are assigned from per-table counters starting at 1, matching the
/// BIGSERIAL behavior of the PostgreSQL backend. Contents are lost on
/// restart.
#[derive(Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    movies: BTreeMap<DbId, Movie>,
    comments: Vec<MovieComment>,
    last_movie_id: DbId,
    last_comment_id: DbId,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Convert a non-negative `i64` count into a `usize`, saturating.
fn to_usize(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_movies(
        &self,
        filter: &MovieFilter,
        page: &PageRequest,
    ) -> StoreResult<Vec<Movie>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movies
            .values()
            .rev()
            .filter(|m| filter.matches(m.genre_slice()))
            .skip(to_usize(page.offset()))
            .take(to_usize(page.limit()))
            .cloned()
            .collect())
    }

    async fn count_movies(&self, filter: &MovieFilter) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        let count = tables
            .movies
            .values()
            .filter(|m| filter.matches(m.genre_slice()))
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn distinct_genres(&self) -> StoreResult<Vec<String>> {
        let tables = self.tables.read().await;
        Ok(tables
            .movies
            .values()
            .filter_map(|m| m.genres.as_ref())
            .flatten()
            .cloned()
            .collect())
    }

    async fn find_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        Ok(self.tables.read().await.movies.get(&id).cloned())
    }

    async fn movie_exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.read().await.movies.contains_key(&id))
    }

    async fn insert_movie(&self, draft: &MovieDraft) -> StoreResult<Movie> {
        let mut tables = self.tables.write().await;
        tables.last_movie_id += 1;
        let movie = Movie::from_draft(tables.last_movie_id, draft, chrono::Utc::now());
        tables.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn list_comments(&self, movie_id: DbId, limit: i64) -> StoreResult<Vec<MovieComment>> {
        let tables = self.tables.read().await;
        let mut comments: Vec<MovieComment> = tables
            .comments
            .iter()
            .filter(|c| c.movie_id == movie_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        comments.truncate(to_usize(limit));
        Ok(comments)
    }

    async fn insert_comment(
        &self,
        movie_id: DbId,
        draft: &CommentDraft,
    ) -> StoreResult<MovieComment> {
        let mut tables = self.tables.write().await;
        tables.last_comment_id += 1;
        let now = chrono::Utc::now();
        let comment = MovieComment {
            id: tables.last_comment_id,
            movie_id,
            author: draft.author.clone(),
            message: draft.message.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
