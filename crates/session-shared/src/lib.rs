//! # Session Shared
//! 
//! Configuration, telemetry, constants, and error types for the cookie session server.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use self::config::AppConfig;
pub use error::AppError;
