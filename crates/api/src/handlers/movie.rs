//! Handlers for browsing and adding movies.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmvault_core::error::CoreError;
use filmvault_core::movie_input::{MovieDraft, MoviePayload};
use filmvault_core::page_window::page_window;
use filmvault_core::pagination::MovieQuery;
use filmvault_core::types::parse_movie_id;
use filmvault_db::store::{fetch_movie_page, sorted_genres};

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;
use crate::response::{ItemsResponse, MoviePage};
use crate::state::AppState;

/// GET /movie/movies/genres
///
/// Distinct genres across the catalog, sorted ascending.
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = sorted_genres(state.store.as_ref()).await?;

    Ok(Json(ItemsResponse { items: genres }))
}

/// GET /movie/movies?genre=&page=&limit=
///
/// Newest-first page of movies, optionally restricted to one genre.
/// Malformed paging values fall back to defaults.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<impl IntoResponse> {
    let query = MovieQuery::from_raw(
        params.genre.as_deref(),
        params.page.as_deref(),
        params.limit.as_deref(),
    );

    let result = fetch_movie_page(state.store.as_ref(), &query).await?;
    let total_pages = query.page.total_pages(result.total);

    tracing::debug!(
        genre = query.filter.genre.as_deref(),
        page = query.page.page,
        page_size = query.page.page_size,
        total = result.total,
        "Listed movies",
    );

    Ok(Json(MoviePage {
        items: result.items,
        total: result.total,
        page: query.page.page,
        page_size: query.page.page_size,
        total_pages,
        page_items: page_window(query.page.page, total_pages),
    }))
}

/// GET /movie/{movie_id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let movie_id = parse_movie_id(&movie_id)?;

    let movie = state
        .store
        .find_movie(movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    Ok(Json(movie))
}

/// POST /movie/addMovie
///
/// Validate a loosely-typed payload and store it. Only the title is
/// required; unusable optional fields are dropped. A body that is not JSON
/// is a 400.
pub async fn add_movie(
    State(state): State<AppState>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let draft = MovieDraft::from_payload(&payload)?;

    let movie = state.store.insert_movie(&draft).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}
