//! Configuration management
//!
//! Sources, lowest precedence first: built-in defaults, `config/default.toml`,
//! `config/{APP_ENV}.toml`, then `APP__SECTION__KEY` environment variables.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::*;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub cookie: CookieSettings,
    pub frontend: FrontendSettings,
    pub cors: CorsSettings,
    pub session: GrantSettings,
    pub saml: GrantSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CookieSettings {
    /// Empty means host-only.
    pub domain: String,
    pub ttl_minutes: i64,
}

impl CookieSettings {
    /// `ttl_minutes` must give a forward expiry a browser will keep.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=MAX_COOKIE_TTL_MINUTES).contains(&self.ttl_minutes) {
            return Err(AppError::CookiePolicy(format!(
                "ttl_minutes must be between 1 and {}, got {}",
                MAX_COOKIE_TTL_MINUTES, self.ttl_minutes
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendSettings {
    pub url: String,
}

impl FrontendSettings {
    /// `<frontend url>/auth/callback`
    pub fn callback_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), FRONTEND_CALLBACK_PATH)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allowed_methods: Vec<String>,
}

/// Employee identifier and token handed out by one login flow.
#[derive(Debug, Deserialize, Clone)]
pub struct GrantSettings {
    pub employee_id: String,
    pub access_token: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .set_default("server.env", env.as_str())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Self::environment())
            .build()?;
        let config: Self = config.try_deserialize()?;
        config.cookie.validate()?;
        Ok(config)
    }

    /// Builder pre-seeded with every default, so an empty environment still deserializes.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.env", "development")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.name", "session-server")?
            .set_default("cookie.domain", "")?
            .set_default("cookie.ttl_minutes", DEFAULT_COOKIE_TTL_MINUTES)?
            .set_default("frontend.url", DEFAULT_FRONTEND_URL)?
            .set_default("cors.allowed_origins", DEFAULT_ALLOWED_ORIGINS.to_vec())?
            .set_default("cors.allowed_headers", DEFAULT_ALLOWED_HEADERS.to_vec())?
            .set_default("cors.allowed_methods", DEFAULT_ALLOWED_METHODS.to_vec())?
            .set_default("session.employee_id", DEFAULT_SESSION_EMPLOYEE_ID)?
            .set_default("session.access_token", DEFAULT_SESSION_ACCESS_TOKEN)?
            .set_default("saml.employee_id", DEFAULT_SAML_EMPLOYEE_ID)?
            .set_default("saml.access_token", DEFAULT_SAML_ACCESS_TOKEN)?
            .set_default("log.format", "json")
    }

    pub fn environment() -> Environment {
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins")
            .with_list_parse_key("cors.allowed_headers")
            .with_list_parse_key("cors.allowed_methods")
    }
}
