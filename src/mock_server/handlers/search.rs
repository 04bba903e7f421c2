//! Search endpoint handlers.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde_json::json;

use super::{paged, ListQuery};
use crate::mock_server::state::SharedState;

/// GET /api/v1/search/{query}
pub async fn search(
    State(state): State<SharedState>,
    Path(query): Path<String>,
) -> Json<serde_json::Value> {
    let state = state.read().await;
    Json(json!({ "results": state.search(&query) }))
}

/// GET /api/v1/vulnerability
pub async fn list_vulnerabilities(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    paged(state.list_vulnerabilities(query.search_text()), &query)
}
