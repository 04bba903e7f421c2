//! BOM upload handler.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::mock_server::state::{BomForm, BomRejection, SharedState};

/// POST /api/v1/bom
pub async fn upload_bom(State(state): State<SharedState>, mut multipart: Multipart) -> Response {
    let mut form = BomForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return (StatusCode::BAD_REQUEST, e.body_text()).into_response(),
        };
        let name = field.name().unwrap_or_default().to_string();
        let data = match field.bytes().await {
            Ok(data) => data.to_vec(),
            Err(e) => return (StatusCode::BAD_REQUEST, e.body_text()).into_response(),
        };
        let text = || String::from_utf8_lossy(&data).into_owned();

        match name.as_str() {
            "bom" => form.bom = Some(data.clone()),
            "project" => form.project = Some(text()),
            "projectName" => form.project_name = Some(text()),
            "projectVersion" => form.project_version = Some(text()),
            "autoCreate" => form.auto_create = text().eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    let mut state = state.write().await;
    match state.accept_bom(form) {
        Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
        Err(BomRejection::MissingBom) => {
            (StatusCode::BAD_REQUEST, "The BOM part is missing.").into_response()
        }
        Err(BomRejection::ProjectNotFound) => {
            (StatusCode::NOT_FOUND, "The project could not be found.").into_response()
        }
    }
}
