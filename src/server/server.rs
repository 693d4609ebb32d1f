use anyhow::Result;
use axum::http::HeaderMap;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::config::settings::SettingsConfig;
use crate::request::authenticator::RequestAuthenticator;
use crate::request::headers::{caller_id, client_id, is_public};
use crate::server::middleware::{authenticate_middleware, AuthState};

/// Router with the identity-echo route behind the authentication middleware.
pub fn router(authenticator: RequestAuthenticator) -> Router {
    let state = AuthState::new(authenticator);

    Router::new()
        .route("/identity", get(identity))
        .layer(from_fn_with_state(state, authenticate_middleware))
}

/// Echo the identity the middleware established for this request.
async fn identity(headers: HeaderMap) -> Json<serde_json::Value> {
    Json(json!({
        "public": is_public(Some(&headers)),
        "caller_id": caller_id(Some(&headers)),
        "client_id": client_id(Some(&headers)),
    }))
}

/// Start the demo server on the configured address.
pub async fn start(settings: &SettingsConfig, authenticator: RequestAuthenticator) -> Result<()> {
    let app = router(authenticator);

    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!(address = %bind_addr, "starting server");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
