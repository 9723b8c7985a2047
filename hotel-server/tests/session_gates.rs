//! Session token gates on the staff/owner surfaces

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hotel_server::auth::{Role, SessionConfig, SessionService};
use hotel_server::{Config, ServerState, api};

async fn test_app() -> (tempfile::TempDir, axum::Router, ServerState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(dir.path().to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await;
    let app = api::build_app(state.clone());
    (dir, app, state)
}

async fn get(app: &axum::Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn login(app: &axum::Router, uri: &str, password: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({"password": password})).unwrap(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn correct_password_issues_role_token() {
    let (_dir, app, state) = test_app().await;

    let (status, body) = login(&app, "/api/staff/login", "EAAadmin123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "staff");

    let claims = state
        .sessions
        .verify(body["token"].as_str().unwrap())
        .expect("issued token must verify");
    assert_eq!(claims.role, Role::Staff);

    let (status, body) = login(&app, "/api/owner/login", "EAAowner123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "owner");
}

#[tokio::test]
async fn wrong_password_is_refused() {
    let (_dir, app, _state) = test_app().await;

    let (status, body) = login(&app, "/api/staff/login", "letmein").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");

    // The owner password does not open the staff door
    let (status, _) = login(&app, "/api/staff/login", "EAAowner123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gated_routes_require_a_session() {
    let (_dir, app, _state) = test_app().await;

    let (status, body) = get(&app, "/api/staff/dashboard", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3001");

    let (status, _) = get(&app, "/api/owner/dashboard", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let (_dir, app, _state) = test_app().await;

    let (status, body) = get(&app, "/api/staff/dashboard", Some("not.a.token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3002");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let (_dir, app, state) = test_app().await;

    let expired_service = SessionService::with_config(SessionConfig {
        expiration_minutes: -5,
        ..state.config.session.clone()
    });
    let token = expired_service.issue(Role::Staff).unwrap();

    let (status, body) = get(&app, "/api/staff/dashboard", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3003");
}

#[tokio::test]
async fn wrong_role_is_forbidden() {
    let (_dir, app, state) = test_app().await;

    let owner = state.sessions.issue(Role::Owner).unwrap();
    let (status, body) = get(&app, "/api/staff/dashboard", Some(&owner)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "E2001");

    let staff = state.sessions.issue(Role::Staff).unwrap();
    let (status, body) = get(&app, "/api/owner/dashboard", Some(&staff)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "E2001");
}

#[tokio::test]
async fn staff_dashboard_lists_active_bookings() {
    let (_dir, app, state) = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/book")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({
                "name": "Meera Iyer",
                "email": "meera@example.com",
                "room_type": "Non-AC",
                "check_in": "2024-05-10",
                "check_out": "2024-05-11",
            }))
            .unwrap(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let staff = state.sessions.issue(Role::Staff).unwrap();
    let (status, body) = get(&app, "/api/staff/dashboard", Some(&staff)).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["name"], "Meera Iyer");
    assert_eq!(bookings[0]["price"], 2500);
}
