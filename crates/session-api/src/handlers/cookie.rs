// ============================================================================
// Session API - Cookie Handlers
// File: crates/session-api/src/handlers/cookie.rs
// ============================================================================
//! Set, verify, and clear the `access_token` cookie.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::cookie::SECURE;
use crate::error::ApiError;
use crate::response::{CookieIssuedResponse, StatusResponse, TokenVerifiedResponse};
use crate::state::AppState;

/// Set cookie handler - POST /set-cookie
pub async fn set_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<CookieIssuedResponse>) {
    let grant = &state.config.session;

    info!("[COOKIE] Setting access_token cookie for employee: {}", grant.employee_id);
    info!(
        "[COOKIE] Cookie config - Domain: {}, Secure: {}, Environment: {}",
        state.cookies.domain(),
        SECURE,
        state.config.server.env
    );

    let jar = jar.add(state.cookies.issue(&grant.access_token));

    info!("[COOKIE] Cookie set successfully, redirecting to: {}", state.redirect_url);

    (
        jar,
        Json(CookieIssuedResponse {
            message: "HTTP-only cookie set successfully".to_string(),
            success: true,
            redirect_url: state.redirect_url.clone(),
            employee: grant.employee_id.clone(),
        }),
    )
}

/// Verify cookie handler - GET /verify-cookie
///
/// Presence of a non-empty cookie is all that is checked.
pub async fn verify_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<TokenVerifiedResponse>, ApiError> {
    info!("[COOKIE] Verifying access_token cookie...");

    let token = state
        .cookies
        .bearer_token(&jar)
        .ok_or_else(|| ApiError::Unauthorized("No access_token cookie found".to_string()))?;

    info!("[COOKIE] Access token verified successfully");

    Ok(Json(TokenVerifiedResponse {
        message: "Access token cookie verified".to_string(),
        success: true,
        token: token.to_string(),
    }))
}

/// Clear cookie handler - POST /clear-cookie
pub async fn clear_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<StatusResponse>) {
    info!("[COOKIE] Clearing access_token cookie...");

    let jar = jar.add(state.cookies.revoke());

    info!("[COOKIE] Access token cookie cleared successfully");

    (
        jar,
        Json(StatusResponse::success("Access token cookie cleared successfully")),
    )
}
