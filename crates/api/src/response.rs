//! Response envelope types for API handlers.
//!
//! Collections are returned as `{ "items": [...] }`; single records are
//! returned bare.

use filmvault_core::page_window::PageItem;
use serde::Serialize;

/// Standard `{ "items": [...] }` collection envelope.
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T: Serialize> {
    pub items: Vec<T>,
}

/// One page of the movie list.
///
/// `page` and `page_size` echo the normalized request. `page_items` is the
/// compact window a pagination control renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub page_items: Vec<PageItem>,
}
