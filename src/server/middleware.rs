use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::request::authenticator::RequestAuthenticator;

/// Shared middleware state: one authenticator for the whole handler chain.
#[derive(Clone)]
pub struct AuthState {
    pub authenticator: Arc<RequestAuthenticator>,
}

impl AuthState {
    pub fn new(authenticator: RequestAuthenticator) -> Self {
        Self {
            authenticator: Arc::new(authenticator),
        }
    }
}

/// Run the authentication pipeline on every request before the inner handler.
///
/// The authenticator itself never writes a response; translating its error
/// into an HTTP failure is this layer's job.
pub async fn authenticate_middleware(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    match state.authenticator.authenticate(Some(&mut request)).await {
        Ok(()) => next.run(request).await,
        Err(err) => {
            error!(error = %err, "request authentication failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}
