use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Public liveness endpoint; deliberately outside the guard.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
