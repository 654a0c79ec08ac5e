use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::elevenlabs::ElevenLabsClient;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(client): State<Arc<ElevenLabsClient>>) -> impl IntoResponse {
    match client.check_connection().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "voice_service": "connected"
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "voice_service": "unreachable"
            })),
        ),
    }
}
