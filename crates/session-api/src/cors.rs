//! Cross-origin policy
//!
//! Allowed origins are either literal (`http://localhost:8083`) or a single
//! leading-label wildcard (`https://*.netlify.app`). Credentials are always allowed,
//! so a bare `*` is rejected.

use std::str::FromStr;
use std::sync::Arc;

use axum::http::{request::Parts, HeaderName, HeaderValue, Method};
use session_shared::{config::CorsSettings, AppError};
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPattern {
    Exact(String),
    /// `scheme://*<suffix>`, where `suffix` starts with `.`
    Wildcard { scheme: String, suffix: String },
}

impl FromStr for OriginPattern {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = s.trim().trim_end_matches('/').to_ascii_lowercase();
        if pattern.is_empty() {
            return Err(AppError::CorsPolicy("empty origin".to_string()));
        }
        if pattern == "*" {
            return Err(AppError::CorsPolicy(
                "origin `*` cannot be used with credentials".to_string(),
            ));
        }

        let (scheme, host) = pattern
            .split_once("://")
            .ok_or_else(|| AppError::CorsPolicy(format!("origin `{}` has no scheme", s.trim())))?;

        match host.strip_prefix('*') {
            Some(suffix) if suffix.starts_with('.') && suffix.len() > 1 && !suffix.contains('*') => {
                Ok(OriginPattern::Wildcard {
                    scheme: scheme.to_string(),
                    suffix: suffix.to_string(),
                })
            }
            None if !host.is_empty() && !host.contains('*') => Ok(OriginPattern::Exact(pattern)),
            _ => Err(AppError::CorsPolicy(format!(
                "unsupported origin pattern `{}`",
                s.trim()
            ))),
        }
    }
}

impl OriginPattern {
    pub fn matches(&self, origin: &str) -> bool {
        let origin = origin.to_ascii_lowercase();
        match self {
            OriginPattern::Exact(expected) => origin == *expected,
            OriginPattern::Wildcard { scheme, suffix } => {
                let Some(host) = origin
                    .strip_prefix(scheme.as_str())
                    .and_then(|rest| rest.strip_prefix("://"))
                else {
                    return false;
                };
                match host.strip_suffix(suffix.as_str()) {
                    Some(labels) => {
                        !labels.is_empty()
                            && !labels.starts_with('.')
                            && !labels.ends_with('.')
                            && labels
                                .chars()
                                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
                    }
                    None => false,
                }
            }
        }
    }
}

/// Build the CORS layer for the configured origins, headers, and methods.
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer, AppError> {
    let patterns = settings
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<OriginPattern>())
        .collect::<Result<Vec<_>, _>>()?;
    let patterns = Arc::new(patterns);

    let methods = settings
        .allowed_methods
        .iter()
        .map(|method| {
            reject_wildcard("method", method)?;
            Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
                .map_err(|e| AppError::CorsPolicy(format!("method `{}`: {}", method, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let headers = settings
        .allowed_headers
        .iter()
        .map(|header| {
            reject_wildcard("header", header)?;
            HeaderName::from_bytes(header.trim().as_bytes())
                .map_err(|e| AppError::CorsPolicy(format!("header `{}`: {}", header, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|origin| patterns.iter().any(|p| p.matches(origin)))
                    .unwrap_or(false)
            },
        ))
        .allow_credentials(true)
        .allow_methods(methods)
        .allow_headers(headers))
}

/// `*` is only a wildcard without credentials; tower-http refuses the combination.
fn reject_wildcard(kind: &str, value: &str) -> Result<(), AppError> {
    if value.trim() == "*" {
        return Err(AppError::CorsPolicy(format!(
            "{} `*` cannot be used with credentials",
            kind
        )));
    }
    Ok(())
}
