use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// DELETE /api/products/:id - hard delete, no tombstone
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    state.products.delete(auth.account_id, id).await?;

    Ok(ApiResponse::success(json!({ "message": "Product deleted" })))
}
