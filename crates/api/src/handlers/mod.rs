//! HTTP handlers.
//!
//! Handlers parse and validate input through `filmvault_core` before any
//! store call, then map results onto response envelopes.

pub mod comment;
pub mod movie;
