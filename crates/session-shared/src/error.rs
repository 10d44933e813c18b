//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid cookie policy: {0}")]
    CookiePolicy(String),

    #[error("Invalid CORS policy: {0}")]
    CorsPolicy(String),
}
