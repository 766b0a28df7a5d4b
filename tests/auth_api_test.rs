//! Authentication API integration tests
//!
//! End-to-end tests of the signup, login, and `/me` endpoints over the real
//! router with an in-memory user store.

mod common;

use axum::http::StatusCode;
use motalk::backend::auth::sessions::{create_token_at, TOKEN_TTL_SECS};
use motalk::client::credentials::CredentialStore;
use motalk::client::session::{Session, Surface};
use motalk::shared::user::{Role, UserProfile};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use common::test_server;

#[tokio::test]
async fn test_signup_then_login() {
    let server = test_server(None);

    let response = server
        .post("/signup")
        .json(&serde_json::json!({
            "full_name": "A B",
            "email": "a@students.uonbi.ac.ke",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User created successfully");
    assert!(body.get("userId").is_some());

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "a@students.uonbi.ac.ke",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["role"], "user");
    assert!(!body["token"].as_str().unwrap().is_empty());
    // The sanitized user carries no password material.
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = test_server(None);

    let first = server
        .post("/signup")
        .json(&serde_json::json!({
            "full_name": "A B",
            "email": "dup@example.com",
            "password": "secret1"
        }))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server
        .post("/signup")
        .json(&serde_json::json!({
            "full_name": "C D",
            "email": "dup@example.com",
            "password": "other-password"
        }))
        .await;

    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json();
    assert_eq!(body["error"], "Email already registered");

    // The original credentials still log in; no row was overwritten.
    let login = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "dup@example.com",
            "password": "secret1"
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_unregistered_email() {
    let server = test_server(None);

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "x@nowhere.com",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_none());
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = test_server(None);

    server
        .post("/signup")
        .json(&serde_json::json!({
            "full_name": "A B",
            "email": "a@example.com",
            "password": "secret1"
        }))
        .await;

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "a@example.com",
            "password": "wrong-password"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_none());
    // Identical message to the unknown-email case.
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_admin_login_routes_to_admin_surface() {
    let server = test_server(None);

    server
        .post("/signup")
        .json(&serde_json::json!({
            "full_name": "News Admin",
            "email": "admin@example.com",
            "password": "secret1",
            "role": "admin"
        }))
        .await;

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "admin@example.com",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["role"], "admin");

    // Feed the response into the client session: routing must select the
    // administrative surface.
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::with_path(dir.path().join("credentials.json")).unwrap();
    let mut session = Session::new(store);
    session.begin_login();

    let user: UserProfile = serde_json::from_value(body["user"].clone()).unwrap();
    assert_eq!(user.role, Role::Admin);
    session
        .complete_login(user, body["token"].as_str().unwrap().to_string())
        .unwrap();
    assert_eq!(session.surface(), Surface::AdminHome);
}

#[tokio::test]
async fn test_me_returns_profile() {
    let server = test_server(None);

    server
        .post("/signup")
        .json(&serde_json::json!({
            "full_name": "A B",
            "email": "a@example.com",
            "password": "secret1"
        }))
        .await;

    let login: serde_json::Value = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "a@example.com",
            "password": "secret1"
        }))
        .await
        .json();
    let token = login["token"].as_str().unwrap();

    let response = server
        .get("/me")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "a@example.com");
    assert_eq!(body["full_name"], "A B");
}

#[tokio::test]
async fn test_me_without_token() {
    let server = test_server(None);

    let response = server.get("/me").await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Token is required");
}

#[tokio::test]
async fn test_me_with_malformed_header() {
    let server = test_server(None);

    let response = server
        .get("/me")
        .add_header("Authorization", "Token abc")
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let server = test_server(None);

    let response = server
        .get("/me")
        .add_header("Authorization", "Bearer not.a.token")
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Token is not valid");
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let server = test_server(None);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let expired = create_token_at(Uuid::new_v4(), Role::User, now - 2 * TOKEN_TTL_SECS).unwrap();

    let response = server
        .get("/me")
        .add_header("Authorization", format!("Bearer {}", expired))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = test_server(None);

    let response = server.get("/feed").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
