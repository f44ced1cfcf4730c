use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, password, Claims};
use crate::database::models::NewUser;
use crate::error::ApiError;
use crate::handlers::require;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth/register - create an account and issue a session token
///
/// The response carries the token only, no profile payload.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Value> {
    const MISSING: &str = "All fields are required";

    let name = require(payload.name, MISSING)?;
    let username = require(payload.username, MISSING)?;
    let email = require(payload.email, MISSING)?;
    let password = require(payload.password, MISSING)?;

    let password_hash = password::hash_password(&password).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal("Registration failed")
    })?;

    let user = state
        .users
        .create(NewUser {
            name,
            username,
            email,
            password_hash,
        })
        .await?;

    let token = generate_jwt(&Claims::new(user.id)).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal("Registration failed")
    })?;

    Ok(ApiResponse::created(json!({ "token": token })))
}
