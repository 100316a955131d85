//! Session extraction from identity headers.
//!
//! An authenticating proxy (e.g. oauth2-proxy in front of Keycloak) forwards
//! the user's email and access token as request headers. The session is built
//! from those headers only; nothing is stored server-side.

use axum::http::HeaderMap;
use weatherdash_core::{Session, SessionUser, config::AuthConfig};

pub fn session_from_headers(headers: &HeaderMap, config: &AuthConfig) -> Option<Session> {
    let email = header_value(headers, &config.email_header)?;
    let access_token = header_value(headers, &config.access_token_header);

    Some(Session {
        user: SessionUser { email: Some(email) },
        access_token,
    })
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
