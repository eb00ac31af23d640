//! Handler tests for the auth endpoints.
//!
//! Runs the users router alone over the in-memory credential store.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_helpers::{ErrorResponse, JwtAuth, JwtConfig};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let jwt = JwtAuth::new(&JwtConfig::new("handler-test-secret-at-least-32-chars").unwrap());
    handlers::router(AuthService::new(InMemoryUserRepository::new(), jwt))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn alice() -> serde_json::Value {
    json!({"username": "alice", "email": "alice@x.com", "password": "pw123456"})
}

#[tokio::test]
async fn test_register_returns_201_with_token() {
    let response = app().oneshot(post_json("/register", alice())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let auth: AuthResponse = json_body(response.into_body()).await;
    assert_eq!(auth.username, "alice");
    assert_eq!(auth.email, "alice@x.com");
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username_is_409() {
    let app = app();
    app.clone().oneshot(post_json("/register", alice())).await.unwrap();

    let response = app
        .oneshot(post_json(
            "/register",
            json!({"username": "alice", "email": "other@x.com", "password": "pw123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Username already exists");
}

#[tokio::test]
async fn test_register_duplicate_email_is_409() {
    let app = app();
    app.clone().oneshot(post_json("/register", alice())).await.unwrap();

    let response = app
        .oneshot(post_json(
            "/register",
            json!({"username": "alicia", "email": "alice@x.com", "password": "pw123456"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Email already exists");
}

#[tokio::test]
async fn test_register_short_password_is_400() {
    let response = app()
        .oneshot(post_json(
            "/register",
            json!({"username": "alice", "email": "alice@x.com", "password": "123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_and_me() {
    let app = app();
    app.clone().oneshot(post_json("/register", alice())).await.unwrap();

    let response = app
        .clone()
        .oneshot(post_json("/login", json!({"username": "alice", "password": "pw123456"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let auth: AuthResponse = json_body(response.into_body()).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/me")
                .header("authorization", format!("Bearer {}", auth.token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let profile: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(profile["username"], "alice");
    assert_eq!(profile["userId"], auth.user_id.to_string());
    assert_eq!(profile["role"], "USER");
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let app = app();
    app.clone().oneshot(post_json("/register", alice())).await.unwrap();

    let response = app
        .oneshot(post_json("/login", json!({"username": "alice", "password": "nope-nope"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Invalid username or password");
}

#[tokio::test]
async fn test_me_without_token_is_401() {
    let response = app()
        .oneshot(Request::builder().uri("/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token_is_401() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/me")
                .header("authorization", "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
