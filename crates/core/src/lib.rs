//! Domain logic for the movie catalog.
//!
//! Everything in this crate is pure: no I/O, no database handles. The store
//! and HTTP layers call into these modules to normalize query parameters,
//! coerce loosely-typed payloads and build pagination controls.

pub mod comment;
pub mod error;
pub mod loose;
pub mod movie_input;
pub mod page_window;
pub mod pagination;
pub mod types;
