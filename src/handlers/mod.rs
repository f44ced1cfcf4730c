pub mod auth;
pub mod products;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

/// Require a present, non-empty string field.
pub(crate) fn require(field: Option<String>, message: &str) -> Result<String, ApiError> {
    match field {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(message)),
    }
}

/// GET /health - liveness plus a store ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.users.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
