use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comment, movie};
use crate::state::AppState;

/// Movie and comment routes, mounted under `/movie`.
///
/// The static `/movies` and `/addMovie` segments take precedence over the
/// `{movie_id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list_movies))
        .route("/movies/genres", get(movie::list_genres))
        .route("/addMovie", post(movie::add_movie))
        .route("/{movie_id}", get(movie::get_movie))
        .route(
            "/{movie_id}/comments",
            get(comment::list_comments).post(comment::add_comment),
        )
}
