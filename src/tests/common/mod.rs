// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;

use crate::config::settings::OauthConfig;
use crate::utils::constants::DEFAULT_OAUTH_TIMEOUT_MS;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Config pointing the lookup client at an in-process fake identity provider.
pub fn oauth_config_for(addr: SocketAddr) -> OauthConfig {
    OauthConfig {
        base_url: format!("http://{}", addr),
        timeout_ms: DEFAULT_OAUTH_TIMEOUT_MS,
    }
}

/// Fake identity provider with one canned token.
///
///  - `abc`     -> `{id:"abc", user_id:42, client_id:7}`
///  - `boom`    -> 500
///  - `garbled` -> 200 with a body that is not an AccessToken
///  - anything else -> 404
pub fn fake_identity_provider() -> Router {
    Router::new().route(
        "/oauth/access_token/{token_id}",
        get(|Path(token_id): Path<String>| async move {
            match token_id.as_str() {
                "abc" => (
                    StatusCode::OK,
                    json!({"id": "abc", "user_id": 42, "client_id": 7}).to_string(),
                ),
                "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "lookup exploded".to_owned()),
                "garbled" => (StatusCode::OK, "not json at all".to_owned()),
                _ => (StatusCode::NOT_FOUND, "not found".to_owned()),
            }
        }),
    )
}
