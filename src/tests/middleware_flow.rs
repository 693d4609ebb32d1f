// Drives the demo router end to end: fake identity provider on one port,
// the guarded app on another, plain reqwest in between.

#[cfg(test)]
mod test {
    use http::StatusCode;

    use crate::request::authenticator::RequestAuthenticator;
    use crate::server::server::router;
    use crate::tests::common::{fake_identity_provider, oauth_config_for, spawn_axum};
    use crate::utils::constants::HEADER_X_PUBLIC;

    async fn spawn_guarded_app() -> (Vec<tokio::task::JoinHandle<()>>, String) {
        let (idp_handle, idp_addr) = spawn_axum(fake_identity_provider()).await;
        let authenticator = RequestAuthenticator::new(&oauth_config_for(idp_addr)).unwrap();
        let (app_handle, app_addr) = spawn_axum(router(authenticator)).await;
        (
            vec![idp_handle, app_handle],
            format!("http://{}/identity", app_addr),
        )
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn token_flows_through_to_the_handler() {
        let (handles, url) = spawn_guarded_app().await;
        let client = reqwest::Client::new();

        let response = client
            .get(format!("{}?access_token=abc", url))
            .header("X-Caller-Id", "666") // forged, must not survive
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["caller_id"], 42);
        assert_eq!(body["client_id"], 7);
        assert_eq!(body["public"], false);

        for handle in handles {
            handle.abort();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn public_request_without_token_stays_anonymous() {
        let (handles, url) = spawn_guarded_app().await;
        let client = reqwest::Client::new();

        let response = client
            .get(&url)
            .header(HEADER_X_PUBLIC, "true")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["public"], true);
        assert_eq!(body["caller_id"], 0);
        assert_eq!(body["client_id"], 0);

        for handle in handles {
            handle.abort();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn provider_error_becomes_http_500() {
        let (handles, url) = spawn_guarded_app().await;

        let response = reqwest::get(format!("{}?access_token=boom", url))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        for handle in handles {
            handle.abort();
        }
    }
}
