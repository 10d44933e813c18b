mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::*;
use tower::ServiceExt;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/set-cookie")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("request builds successfully")
}

#[tokio::test]
async fn preflight_from_wildcard_origin_is_allowed() {
    let res = app()
        .oneshot(preflight("https://preview-42.netlify.app"))
        .await
        .expect("service call succeeds");

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("https://preview-42.netlify.app")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn preflight_from_unknown_origin_gets_no_grant() {
    let res = app()
        .oneshot(preflight("https://evil.example.com"))
        .await
        .expect("service call succeeds");

    assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn simple_request_from_literal_origin_echoes_origin() {
    let req = Request::builder()
        .method("GET")
        .uri("/verify-cookie")
        .header(header::ORIGIN, "http://localhost:8083")
        .body(Body::empty())
        .expect("request builds successfully");
    let res = app().oneshot(req).await.expect("service call succeeds");

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:8083")
    );
}

#[test]
fn wildcard_header_list_fails_router_build() {
    let mut config = default_config();
    config.cors.allowed_headers = vec!["*".into()];

    assert!(session_api::AppState::new(config)
        .and_then(session_api::build_router)
        .is_err());
}

#[test]
fn invalid_origin_list_fails_router_build() {
    let mut config = default_config();
    config.cors.allowed_origins = vec!["*".into()];

    assert!(session_api::AppState::new(config)
        .and_then(session_api::build_router)
        .is_err());
}
