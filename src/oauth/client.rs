use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::config::settings::OauthConfig;
use crate::errors::AuthError;
use crate::oauth::access_token::AccessToken;
use crate::utils::constants::OAUTH_TOKEN_PATH;

/// Outcome of a single token lookup.
///
/// `Unavailable` means the identity provider produced no response at all
/// (connection failure, timeout). Callers that must fail closed on provider
/// outage can match on it; the request pipeline treats it as anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Authenticated(AccessToken),
    NotFound,
    Unavailable,
}

/// Client for the identity provider's introspection endpoint.
///
/// Base URL and timeout are fixed at construction; the client is cheap to
/// clone and safe to share across request-handling tasks.
#[derive(Debug, Clone)]
pub struct OauthClient {
    base_url: String,
    client: Client,
}

impl OauthClient {
    pub fn new(cfg: &OauthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?;

        Ok(Self {
            base_url: cfg.base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Exchange an opaque token id for the identity behind it.
    ///
    /// GET `{base_url}/oauth/access_token/{id}`. A 404 means the token is
    /// unknown; any other non-2xx answer and any unparseable success body
    /// surface as `AuthError`.
    pub async fn get_access_token(&self, access_token_id: &str) -> Result<Lookup, AuthError> {
        let url = format!("{}{}/{}", self.base_url, OAUTH_TOKEN_PATH, access_token_id);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "identity provider unreachable, token lookup skipped");
                return Ok(Lookup::Unavailable);
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        if status.as_u16() > 299 {
            return Err(AuthError::internal(format!(
                "token lookup failed with status {}",
                status
            )));
        }

        let token = response
            .json::<AccessToken>()
            .await
            .map_err(|_| AuthError::internal("error when trying to parse access token response"))?;

        Ok(Lookup::Authenticated(token))
    }
}
