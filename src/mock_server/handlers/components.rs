//! Component endpoint handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::{not_found, paged, ListQuery};
use crate::mock_server::state::SharedState;

/// GET /api/v1/component
pub async fn list_components(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    paged(state.list_components(query.search_text()), &query)
}

/// GET /api/v1/dependency/component/{uuid}
pub async fn get_component_dependencies(
    State(state): State<SharedState>,
    Path(uuid): Path<String>,
) -> Response {
    let state = state.read().await;

    if state.get_component(&uuid).is_none() {
        return not_found("The component could not be found.");
    }
    let detail = state
        .component_dependencies
        .get(&uuid)
        .cloned()
        .unwrap_or_else(|| json!([]));
    (StatusCode::OK, Json(detail)).into_response()
}
