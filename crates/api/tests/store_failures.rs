//! Store failures surface as sanitized 500 responses through the full router.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, get, post_json};
use filmvault_core::comment::CommentDraft;
use filmvault_core::movie_input::MovieDraft;
use filmvault_core::pagination::{MovieFilter, PageRequest};
use filmvault_core::types::DbId;
use filmvault_db::models::comment::MovieComment;
use filmvault_db::models::movie::Movie;
use filmvault_db::store::{CatalogStore, StoreResult};
use serde_json::json;

/// A store whose every operation fails as if the pool were exhausted.
struct UnavailableStore;

#[async_trait]
impl CatalogStore for UnavailableStore {
    async fn list_movies(
        &self,
        _filter: &MovieFilter,
        _page: &PageRequest,
    ) -> StoreResult<Vec<Movie>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn count_movies(&self, _filter: &MovieFilter) -> StoreResult<i64> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn distinct_genres(&self) -> StoreResult<Vec<String>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_movie(&self, _id: DbId) -> StoreResult<Option<Movie>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn movie_exists(&self, _id: DbId) -> StoreResult<bool> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn insert_movie(&self, _draft: &MovieDraft) -> StoreResult<Movie> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_comments(&self, _movie_id: DbId, _limit: i64) -> StoreResult<Vec<MovieComment>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn insert_comment(
        &self,
        _movie_id: DbId,
        _draft: &CommentDraft,
    ) -> StoreResult<MovieComment> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

fn unavailable_app() -> axum::Router {
    common::build_test_app_with(Arc::new(UnavailableStore))
}

async fn assert_internal_error(response: axum::response::Response) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn genres_return_500_when_store_fails() {
    assert_internal_error(get(unavailable_app(), "/movie/movies/genres").await).await;
}

#[tokio::test]
async fn movie_list_returns_500_when_store_fails() {
    assert_internal_error(get(unavailable_app(), "/movie/movies?page=2").await).await;
}

#[tokio::test]
async fn movie_detail_returns_500_when_store_fails() {
    assert_internal_error(get(unavailable_app(), "/movie/1").await).await;
}

#[tokio::test]
async fn add_movie_returns_500_when_store_fails() {
    let response = post_json(
        unavailable_app(),
        "/movie/addMovie",
        json!({"title": "Inception"}),
    )
    .await;
    assert_internal_error(response).await;
}

#[tokio::test]
async fn comments_return_500_when_store_fails() {
    assert_internal_error(get(unavailable_app(), "/movie/1/comments").await).await;

    let response = post_json(
        unavailable_app(),
        "/movie/1/comments",
        json!({"message": "Hello"}),
    )
    .await;
    assert_internal_error(response).await;
}

#[tokio::test]
async fn validation_still_runs_before_the_store() {
    let response =
        post_json(unavailable_app(), "/movie/1/comments", json!({"message": " "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(unavailable_app(), "/movie/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_degraded_store() {
    let response = get(unavailable_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["dbHealthy"], false);
}
