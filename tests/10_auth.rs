mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{register, send, test_app};

#[tokio::test]
async fn register_then_login_issues_valid_tokens() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Ann",
            "username": "ann1",
            "email": "ann@x.com",
            "password": "password1",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let register_token = body["token"].as_str().unwrap().to_string();
    // Token only, no profile payload
    assert_eq!(body.as_object().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "ann1", "password": "password1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let login_token = body["token"].as_str().unwrap().to_string();

    // Both tokens stay valid concurrently
    for token in [&register_token, &login_token] {
        let (status, body) = send(&app, "GET", "/api/auth/me", Some(token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["username"], "ann1");
        assert_eq!(body["user"]["email"], "ann@x.com");
        assert!(body["user"].get("password_hash").is_none());
    }
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let app = test_app();

    for payload in [
        json!({ "username": "ann1", "email": "ann@x.com", "password": "p" }),
        json!({ "name": "Ann", "email": "ann@x.com", "password": "p" }),
        json!({ "name": "Ann", "username": "ann1", "password": "p" }),
        json!({ "name": "Ann", "username": "ann1", "email": "ann@x.com" }),
        json!({ "name": "", "username": "ann1", "email": "ann@x.com", "password": "p" }),
    ] {
        let (status, body) = send(&app, "POST", "/api/auth/register", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "All fields are required");
    }
}

#[tokio::test]
async fn register_rejects_duplicate_username_or_email() {
    let app = test_app();
    register(&app, "ann1", "ann@x.com").await;

    // Same username, fresh email
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Imposter",
            "username": "ann1",
            "email": "other@x.com",
            "password": "password2",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username or email already exists");

    // Same email, fresh username
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Imposter",
            "username": "ann2",
            "email": "ann@x.com",
            "password": "password2",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username or email already exists");

    // The rejected registrations persisted nothing: the new username is free
    register(&app, "ann2", "ann2@x.com").await;
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = test_app();
    register(&app, "ann1", "ann@x.com").await;

    let (wrong_pw_status, wrong_pw_body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "ann1", "password": "wrong" })),
    )
    .await;
    let (no_user_status, no_user_body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "nobody", "password": "password1" })),
    )
    .await;

    // Wrong password and unknown user produce identical responses
    assert_eq!(wrong_pw_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_pw_status, no_user_status);
    assert_eq!(wrong_pw_body, no_user_body);
    assert_eq!(wrong_pw_body["message"], "Invalid credentials");
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/auth/me", Some("garbage.token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
