use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, password, Claims};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth/login - verify credentials and issue a fresh session token
///
/// Every failure path returns the same "Invalid credentials" response:
/// unknown usernames and wrong passwords are indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Value> {
    let username = payload.username.ok_or(ApiError::InvalidCredentials)?;
    let supplied = payload.password.ok_or(ApiError::InvalidCredentials)?;

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    password::verify_password(&supplied, &user.password_hash)
        .map_err(|_| ApiError::InvalidCredentials)?;

    // Fresh token per login; earlier tokens stay valid until they expire
    let token = generate_jwt(&Claims::new(user.id)).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal("Server error")
    })?;

    Ok(ApiResponse::success(json!({ "token": token })))
}
