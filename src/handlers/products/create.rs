use axum::{extract::State, Extension, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::NewProduct;
use crate::error::ApiError;
use crate::handlers::require;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
}

/// POST /api/products - create a product stamped with the caller as owner
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateProductRequest>,
) -> ApiResult<Value> {
    const MISSING: &str = "All fields are required except description";

    let name = require(payload.name, MISSING)?;
    let kind = require(payload.kind, MISSING)?;
    let sku = require(payload.sku, MISSING)?;
    let image_url = require(payload.image_url, MISSING)?;
    let quantity = payload.quantity.ok_or(ApiError::validation(MISSING))?;
    let price = payload.price.ok_or(ApiError::validation(MISSING))?;

    if quantity < 0 {
        return Err(ApiError::validation("Quantity must be non-negative"));
    }
    if price < Decimal::ZERO {
        return Err(ApiError::validation("Price must be non-negative"));
    }

    let product = state
        .products
        .create(NewProduct {
            owner_id: auth.account_id,
            name,
            kind,
            sku,
            image_url,
            description: payload.description,
            quantity,
            price,
        })
        .await?;

    Ok(ApiResponse::created(json!({
        "message": "Product added",
        "productId": product.id,
    })))
}
