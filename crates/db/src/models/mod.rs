//! Row structs for the catalog tables.
//!
//! Rows serialize with camelCase keys and omit absent optional fields, so
//! the JSON body of a stored record carries only what was actually written.

pub mod comment;
pub mod movie;
