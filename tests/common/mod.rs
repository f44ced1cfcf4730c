use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use inventory_api::app;
use inventory_api::database::memory::{MemoryProductRepository, MemoryUserRepository};
use inventory_api::state::AppState;

/// Fresh application over in-memory repositories. Each test gets its own
/// store, so tests are independent and need no database.
pub fn test_app() -> Router {
    app(AppState {
        users: Arc::new(MemoryUserRepository::new()),
        products: Arc::new(MemoryProductRepository::new()),
    })
}

/// Issue one request against the router and decode the JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Register an account and return its session token.
pub async fn register(app: &Router, username: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Test User",
            "username": username,
            "email": email,
            "password": "password1",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Create a product under the given token and return its id.
pub async fn create_product(app: &Router, token: &str, sku: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/products",
        Some(token),
        Some(json!({
            "name": "Widget",
            "type": "hardware",
            "sku": sku,
            "image_url": "https://example.com/w.png",
            "description": "A widget",
            "quantity": 5,
            "price": 10,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "product creation failed: {}", body);
    body["productId"].as_str().unwrap().to_string()
}
