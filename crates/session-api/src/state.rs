use std::sync::Arc;

use session_shared::{config::AppConfig, AppError};

use crate::cookie::CookiePolicy;

/// Immutable state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub cookies: CookiePolicy,
    pub redirect_url: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            cookies: CookiePolicy::new(&config.cookie)?,
            redirect_url: config.frontend.callback_url(),
            config: Arc::new(config),
        })
    }
}
