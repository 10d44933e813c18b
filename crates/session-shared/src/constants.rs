//! Application-wide constants

/// Name of the bearer-token cookie. Never configurable.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
/// Path appended to the frontend base URL after a cookie is issued.
pub const FRONTEND_CALLBACK_PATH: &str = "/auth/callback";

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_COOKIE_TTL_MINUTES: i64 = 10;
/// Browsers cap cookie lifetimes at 400 days.
pub const MAX_COOKIE_TTL_MINUTES: i64 = 400 * 24 * 60;
/// How far in the past a cleared cookie's expiry is placed.
pub const CLEARED_COOKIE_AGE_MINUTES: i64 = 60;

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:8083";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8083",
    "https://*.netlify.app",
    "https://*.ngrok.io",
    "https://*.ngrok-free.app",
];
pub const DEFAULT_ALLOWED_HEADERS: &[&str] = &["Origin", "Content-Type", "Accept", "Authorization"];
pub const DEFAULT_ALLOWED_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "OPTIONS"];

pub const DEFAULT_SESSION_EMPLOYEE_ID: &str = "EMP123456";
pub const DEFAULT_SESSION_ACCESS_TOKEN: &str = "secure_session_12345";
pub const DEFAULT_SAML_EMPLOYEE_ID: &str = "EMP789012";
pub const DEFAULT_SAML_ACCESS_TOKEN: &str = "saml_token_67890";
