//! Static model metadata endpoints.
//!
//! Wire-format-only: these report fixed metadata so tool-calling clients
//! recognize the relay as a capable model server. No decision logic.

use crate::http::state::AppState;
use crate::wire::types::{
    ErrorResponse, ModelDetails, ModelInfo, ShowRequest, ShowResponse, TagsResponse,
    VersionResponse,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;

fn details() -> ModelDetails {
    ModelDetails {
        format: "remote".to_string(),
        family: "session-relay".to_string(),
        parameter_size: "unknown".to_string(),
        quantization_level: "none".to_string(),
    }
}

/// `GET /api/tags`
pub async fn tags(State(state): State<AppState>) -> Json<TagsResponse> {
    let models = state
        .models
        .iter()
        .map(|name| ModelInfo {
            name: name.clone(),
            model: name.clone(),
            modified_at: Utc::now().to_rfc3339(),
            size: 0,
            digest: String::new(),
            details: details(),
        })
        .collect();
    Json(TagsResponse { models })
}

/// `GET /api/version`
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/show`
pub async fn show(
    State(state): State<AppState>,
    Json(request): Json<ShowRequest>,
) -> impl IntoResponse {
    if !state.models.iter().any(|m| *m == request.model) {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("model '{}' not found", request.model),
            }),
        )
            .into_response();
    }

    Json(ShowResponse {
        modelfile: String::new(),
        parameters: String::new(),
        template: String::new(),
        details: details(),
        capabilities: vec!["completion".to_string(), "tools".to_string()],
    })
    .into_response()
}
