//! HTTP request handlers for the mock server.

pub mod bom;
pub mod components;
pub mod licenses;
pub mod projects;
pub mod search;

pub use bom::*;
pub use components::*;
pub use licenses::*;
pub use projects::*;
pub use search::*;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

/// Page size the server applies when the client sends none.
pub const SERVER_DEFAULT_PAGE_SIZE: usize = 100;

/// Pagination and filter parameters accepted by list endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
    pub search_text: Option<String>,
}

impl ListQuery {
    /// The search text, ignoring empty values.
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref().filter(|s| !s.is_empty())
    }
}

/// Slice one page out of `records` and report the total in `X-Total-Count`.
pub fn paged(records: Vec<Value>, query: &ListQuery) -> Response {
    let total = records.len();
    let size = query
        .page_size
        .map(|s| s as usize)
        .unwrap_or(SERVER_DEFAULT_PAGE_SIZE);
    let number = query.page_number.unwrap_or(1).max(1) as usize;

    let start = (number - 1).saturating_mul(size);
    let page: Vec<Value> = records.into_iter().skip(start).take(size).collect();

    (
        StatusCode::OK,
        [("X-Total-Count", total.to_string())],
        Json(page),
    )
        .into_response()
}

/// Plain-text 404, the way DependencyTrack reports missing records.
pub fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, message.to_string()).into_response()
}
