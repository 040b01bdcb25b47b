//! Handlers for per-movie comments.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmvault_core::comment::{CommentDraft, CommentPayload, MAX_COMMENTS_PER_MOVIE};
use filmvault_core::error::CoreError;
use filmvault_core::types::parse_movie_id;

use crate::error::{AppError, AppResult};
use crate::response::ItemsResponse;
use crate::state::AppState;

/// GET /movie/{movie_id}/comments
///
/// Newest first, capped at [`MAX_COMMENTS_PER_MOVIE`]. An unknown movie
/// simply has no comments.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie_id = parse_movie_id(&movie_id)?;

    let comments = state
        .store
        .list_comments(movie_id, MAX_COMMENTS_PER_MOVIE)
        .await?;

    Ok(Json(ItemsResponse { items: comments }))
}

/// POST /movie/{movie_id}/comments
///
/// The message is validated before the movie lookup, so a blank message is
/// a 400 even for an unknown movie.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    payload: Result<Json<CommentPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let movie_id = parse_movie_id(&movie_id)?;
    let Json(payload) = payload?;
    let draft = CommentDraft::from_payload(&payload)?;

    if !state.store.movie_exists(movie_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    let comment = state.store.insert_comment(movie_id, &draft).await?;

    tracing::info!(movie_id, comment_id = comment.id, "Comment added");

    Ok((StatusCode::CREATED, Json(comment)))
}
