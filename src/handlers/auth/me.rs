use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/auth/me - profile of the authenticated caller
///
/// The token gate does not re-check the account store, so a valid token for a
/// since-deleted account reaches this handler; the lookup then comes back
/// empty and the caller gets a 401.
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Value> {
    let user = state
        .users
        .find_by_id(auth.account_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Not authorized"))?;

    Ok(ApiResponse::success(json!({ "user": user })))
}
