//! The single coarse `sessionId` cookie.
//!
//! A request to `/` without the cookie starts a new session: the server
//! issues a fresh id and the caller resets the todo store.

use axum::http::{header::COOKIE, HeaderMap};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "sessionId";
pub const SESSION_MAX_AGE_SECS: u64 = 6000;

/// The session id carried by the request, if any.
pub fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
        })
}

/// A `Set-Cookie` value for a newly generated session.
pub fn new_session_cookie() -> String {
    format!(
        "{SESSION_COOKIE}={}; Max-Age={SESSION_MAX_AGE_SECS}; Path=/; HttpOnly",
        Uuid::new_v4().simple()
    )
}
