//! Federated login callback stub. No assertion is read or validated.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::cookie::SECURE;
use crate::state::AppState;

/// SAML callback handler - GET /auth/saml/callback
pub async fn saml_callback(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let grant = &state.config.saml;

    info!("[SAML] Setting access_token cookie for employee: {}", grant.employee_id);
    info!(
        "[SAML] Cookie config - Domain: {}, Secure: {}, Environment: {}",
        state.cookies.domain(),
        SECURE,
        state.config.server.env
    );

    let jar = jar.add(state.cookies.issue(&grant.access_token));

    info!("[SAML] Cookie set successfully, redirecting to: {}", state.redirect_url);

    (
        StatusCode::SEE_OTHER,
        jar,
        [(header::LOCATION, state.redirect_url.clone())],
        "Redirecting...",
    )
}
