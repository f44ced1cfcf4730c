use axum::{
    extract::{Query, State},
    Extension,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/products?page&limit - page through the caller's products
///
/// `total` counts all of the caller's products, not the returned page.
/// `limit` is capped so a pathological value cannot dump the whole table.
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Value> {
    let api_config = &config::config().api;

    let page = match query.page {
        Some(p) if p >= 1 => p,
        _ => 1,
    };
    let limit = match query.limit {
        Some(l) if l >= 1 => l.min(api_config.max_page_size),
        _ => api_config.default_page_size,
    };
    let offset = page.saturating_sub(1).saturating_mul(limit);

    let result = state.products.list(auth.account_id, offset, limit).await?;

    Ok(ApiResponse::success(json!({
        "page": page,
        "limit": limit,
        "total": result.total,
        "products": result.items,
    })))
}
