// ============================================================================
// Session API - Cookie Policy
// File: crates/session-api/src/cookie.rs
// ============================================================================
//! Builds, reads, and revokes the `access_token` cookie.
//!
//! Every cookie written here is HttpOnly, Secure, SameSite=None, rooted at `/`,
//! and scoped to the configured domain (host-only when the domain is empty).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use session_shared::config::CookieSettings;
use session_shared::constants::{ACCESS_TOKEN_COOKIE, CLEARED_COOKIE_AGE_MINUTES};
use session_shared::AppError;
use time::{Duration, OffsetDateTime};

/// SameSite=None is rejected by browsers without Secure, so this never varies.
pub const SECURE: bool = true;

#[derive(Debug, Clone)]
pub struct CookiePolicy {
    domain: Option<String>,
    ttl: Duration,
}

impl CookiePolicy {
    /// Fails when the configured lifetime is not a bounded, forward expiry.
    pub fn new(settings: &CookieSettings) -> Result<Self, AppError> {
        settings.validate()?;

        let domain = settings.domain.trim();
        Ok(Self {
            domain: (!domain.is_empty()).then(|| domain.to_string()),
            ttl: Duration::minutes(settings.ttl_minutes),
        })
    }

    /// Domain as logged; empty for host-only cookies.
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or_default()
    }

    /// Cookie carrying `token`, expiring `ttl` from now.
    pub fn issue(&self, token: &str) -> Cookie<'static> {
        self.issue_at(token, OffsetDateTime::now_utc())
    }

    pub fn issue_at(&self, token: &str, now: OffsetDateTime) -> Cookie<'static> {
        let mut cookie = self.base(token.to_string());
        cookie.set_expires(now + self.ttl);
        cookie
    }

    /// Empty cookie with an expiry in the past, so the client drops it.
    pub fn revoke(&self) -> Cookie<'static> {
        self.revoke_at(OffsetDateTime::now_utc())
    }

    pub fn revoke_at(&self, now: OffsetDateTime) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.set_expires(now - Duration::minutes(CLEARED_COOKIE_AGE_MINUTES));
        cookie
    }

    /// The bearer token from the request, if present and non-empty.
    pub fn bearer_token<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
    }

    fn base(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::build((ACCESS_TOKEN_COOKIE, value))
            .http_only(true)
            .secure(SECURE)
            .same_site(SameSite::None)
            .path("/")
            .build();
        if let Some(domain) = &self.domain {
            cookie.set_domain(domain.clone());
        }
        cookie
    }
}
