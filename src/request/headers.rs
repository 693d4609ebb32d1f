//! The header contract shared with downstream handlers.
//!
//! `X-Caller-Id` and `X-Client-Id` are trust-boundary headers: whatever a
//! caller sends inbound is stripped before any trust decision, and the
//! headers are re-added only from a verified token lookup.

use http::header::HeaderMap;
use http::HeaderValue;

use crate::oauth::client::Lookup;
use crate::utils::constants::{HEADER_X_CALLER_ID, HEADER_X_CLIENT_ID, HEADER_X_PUBLIC};

/// True when the request is absent or a trusted upstream marked it public.
///
/// Only the exact value `"true"` counts.
pub fn is_public(headers: Option<&HeaderMap>) -> bool {
    match headers {
        None => true,
        Some(headers) => headers
            .get(HEADER_X_PUBLIC)
            .and_then(|value| value.to_str().ok())
            .map(|value| value == "true")
            .unwrap_or(false),
    }
}

/// End-user id established by a verified lookup; 0 when absent or malformed.
pub fn caller_id(headers: Option<&HeaderMap>) -> i64 {
    id_header(headers, HEADER_X_CALLER_ID)
}

/// Client application id established by a verified lookup; 0 when absent or malformed.
pub fn client_id(headers: Option<&HeaderMap>) -> i64 {
    id_header(headers, HEADER_X_CLIENT_ID)
}

fn id_header(headers: Option<&HeaderMap>, name: &str) -> i64 {
    headers
        .and_then(|headers| headers.get(name))
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

/// Strip inbound identity headers before any trust decision is made.
pub fn clean_request(headers: &mut HeaderMap) {
    headers.remove(HEADER_X_CLIENT_ID);
    headers.remove(HEADER_X_CALLER_ID);
}

/// Inject identity headers for a lookup outcome. Pure over the outcome:
/// anything but `Authenticated` leaves the header set untouched.
pub fn apply_lookup(headers: &mut HeaderMap, lookup: &Lookup) {
    if let Lookup::Authenticated(token) = lookup {
        headers.insert(HEADER_X_CLIENT_ID, HeaderValue::from(token.client_id));
        headers.insert(HEADER_X_CALLER_ID, HeaderValue::from(token.user_id));
    }
}
