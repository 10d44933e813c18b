#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use axum_extra::extract::cookie::Cookie;
use serde::de::DeserializeOwned;
use session_api::{build_router, AppState};
use session_shared::AppConfig;

pub fn default_config() -> AppConfig {
    AppConfig::builder()
        .and_then(|builder| builder.build())
        .and_then(|config| config.try_deserialize())
        .expect("default configuration deserializes")
}

pub fn app() -> Router {
    app_with(default_config())
}

pub fn app_with(config: AppConfig) -> Router {
    AppState::new(config)
        .and_then(build_router)
        .expect("router builds")
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds successfully")
}

pub fn request_with_cookie(method: &str, uri: &str, cookie: &Cookie<'_>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, format!("{}={}", cookie.name(), cookie.value()))
        .body(Body::empty())
        .expect("request builds successfully")
}

pub fn set_cookie(res: &Response<Body>) -> Cookie<'static> {
    let value = res
        .headers()
        .get(header::SET_COOKIE)
        .expect("response sets a cookie")
        .to_str()
        .expect("set-cookie is ascii");
    Cookie::parse(value.to_string()).expect("set-cookie parses")
}

pub async fn json<T: DeserializeOwned>(res: Response<Body>) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is json")
}
