//! Shared constants and invariants

/// Marker header set by a trusted upstream for requests that skip authentication.
pub const HEADER_X_PUBLIC: &str = "X-Public";
/// Identity headers derived from a verified token lookup. Never trusted inbound.
pub const HEADER_X_CLIENT_ID: &str = "X-Client-Id";
pub const HEADER_X_CALLER_ID: &str = "X-Caller-Id";

/// Query parameter carrying the opaque access token.
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

/// Path prefix of the introspection endpoint on the identity provider.
pub const OAUTH_TOKEN_PATH: &str = "/oauth/access_token";

pub const DEFAULT_OAUTH_TIMEOUT_MS: u64 = 200;
