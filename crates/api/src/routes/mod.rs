//! Route trees.
//!
//! ```text
//! /health                              liveness and store health
//!
//! /movie/movies                        paginated list (?genre&page&limit)
//! /movie/movies/genres                 distinct sorted genres
//! /movie/addMovie                      create (POST)
//! /movie/{movie_id}                    detail
//! /movie/{movie_id}/comments           list, create (GET, POST)
//! ```

pub mod health;
pub mod movie;
