//! Project endpoint handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::{not_found, paged, ListQuery};
use crate::mock_server::state::SharedState;

const PROJECT_NOT_FOUND: &str = "The project could not be found.";

/// GET /api/v1/project
pub async fn list_projects(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    paged(state.list_projects(query.search_text()), &query)
}

/// GET /api/v1/project/{uuid}/
pub async fn get_project(State(state): State<SharedState>, Path(uuid): Path<String>) -> Response {
    let state = state.read().await;

    match state.get_project(&uuid) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => not_found(PROJECT_NOT_FOUND),
    }
}

/// GET /api/v1/project/{uuid}/property
pub async fn get_project_properties(
    State(state): State<SharedState>,
    Path(uuid): Path<String>,
) -> Response {
    let state = state.read().await;

    if state.get_project(&uuid).is_none() {
        return not_found(PROJECT_NOT_FOUND);
    }
    let properties = state
        .project_properties
        .get(&uuid)
        .cloned()
        .unwrap_or_default();
    (StatusCode::OK, Json(properties)).into_response()
}

/// GET /api/v1/dependency/project/{uuid}
pub async fn get_project_dependencies(
    State(state): State<SharedState>,
    Path(uuid): Path<String>,
) -> Response {
    let state = state.read().await;

    if state.get_project(&uuid).is_none() {
        return not_found(PROJECT_NOT_FOUND);
    }
    let detail = state
        .project_dependencies
        .get(&uuid)
        .cloned()
        .unwrap_or_else(|| json!([]));
    (StatusCode::OK, Json(detail)).into_response()
}
