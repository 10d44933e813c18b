use axum::{
    routing::{get, post},
    Router,
};
use session_shared::AppError;
use tower_http::trace::TraceLayer;

use crate::cors::cors_layer;
use crate::handlers::{cookie, health, saml};
use crate::state::AppState;

/// Build the application router.
///
/// Fails only when the configured CORS policy is invalid.
pub fn build_router(state: AppState) -> Result<Router, AppError> {
    let cors = cors_layer(&state.config.cors)?;

    Ok(Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Cookie routes
        .route("/set-cookie", post(cookie::set_cookie))
        .route("/verify-cookie", get(cookie::verify_cookie))
        .route("/clear-cookie", post(cookie::clear_cookie))
        // Federated login
        .route("/auth/saml/callback", get(saml::saml_callback))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
