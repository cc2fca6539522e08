use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::tts::TtsService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// The provider is only contacted on conversion, so readiness reports which one
/// is configured rather than probing it.
pub async fn health_ready(State(tts_service): State<Arc<TtsService>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts_provider": tts_service.provider(),
        })),
    )
}
