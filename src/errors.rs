use thiserror::Error;

/// The single error condition surfaced by the authenticator.
///
/// Silent outcomes (absent token, unknown token, unreachable identity
/// provider) are not errors; the request just proceeds anonymously. Only an
/// identity provider that answered with a server error, or answered success
/// with a body that does not parse, reaches the caller. The distinguishing
/// detail is kept in the message text only.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn internal(detail: impl Into<String>) -> Self {
        AuthError::Internal(detail.into())
    }
}
