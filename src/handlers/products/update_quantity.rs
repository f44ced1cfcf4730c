use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: Option<i32>,
}

/// PUT /api/products/:id/quantity - overwrite a product's quantity in place
pub async fn update_quantity(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> ApiResult<Value> {
    let quantity = payload
        .quantity
        .ok_or_else(|| ApiError::validation("Quantity is required"))?;

    if quantity < 0 {
        return Err(ApiError::validation("Quantity must be non-negative"));
    }

    let product = state
        .products
        .update_quantity(auth.account_id, id, quantity)
        .await?;

    Ok(ApiResponse::success(json!({
        "message": "Quantity updated",
        "product": product,
    })))
}
