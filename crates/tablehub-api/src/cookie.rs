//! Session cookie construction and parsing.
//!
//! The cookie is the only bearer-token transport: HttpOnly, Secure,
//! SameSite=None (the frontend lives on a different origin), scoped to the
//! root path, with Expires mirroring the session's expiry.

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};

/// Build the `Set-Cookie` value carrying a session token.
pub fn session_cookie(name: &str, token: &str, expires_at: DateTime<Utc>) -> String {
    format!(
        "{name}={token}; Path=/; Expires={}; HttpOnly; Secure; SameSite=None",
        format_http_date(expires_at)
    )
}

/// Build the `Set-Cookie` value that deletes the session cookie. Same flags
/// as the live cookie so browsers match it against the stored one.
pub fn clear_session_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=None")
}

/// Extract the named cookie's value from request headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Format an instant as an RFC 7231 HTTP date (IMF-fixdate, always GMT).
fn format_http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
