//! License endpoint handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use super::{not_found, paged, ListQuery};
use crate::mock_server::state::SharedState;

/// Fields dropped from the concise license listing.
const VERBOSE_FIELDS: &[&str] = &["licenseText", "template", "header", "licenseComments"];

/// GET /api/v1/license
pub async fn list_licenses(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let state = state.read().await;
    paged(state.list_licenses(query.search_text()), &query)
}

/// GET /api/v1/license/concise
///
/// Not paginated on the server.
pub async fn list_concise_licenses(State(state): State<SharedState>) -> Json<Vec<Value>> {
    let state = state.read().await;

    let concise = state
        .licenses
        .iter()
        .cloned()
        .map(|mut license| {
            if let Value::Object(map) = &mut license {
                for name in VERBOSE_FIELDS {
                    map.remove(*name);
                }
            }
            license
        })
        .collect();
    Json(concise)
}

/// GET /api/v1/license/{licenseId}
pub async fn get_license(
    State(state): State<SharedState>,
    Path(license_id): Path<String>,
) -> Response {
    let state = state.read().await;

    match state.get_license(&license_id) {
        Some(license) => (StatusCode::OK, Json(license.clone())).into_response(),
        None => not_found("The license could not be found."),
    }
}
