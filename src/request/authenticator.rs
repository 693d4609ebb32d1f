use http::{Request, Uri};
use tracing::debug;

use crate::config::settings::OauthConfig;
use crate::errors::AuthError;
use crate::oauth::client::{Lookup, OauthClient};
use crate::request::headers::{apply_lookup, clean_request};
use crate::utils::constants::PARAM_ACCESS_TOKEN;

/// Single-pass authentication pipeline over an inbound request.
///
/// Strips inbound identity headers, exchanges the `access_token` query
/// parameter (when present) for an identity, and injects the resulting
/// `X-Caller-Id`/`X-Client-Id` headers. A request without a resolvable
/// identity proceeds anonymously; only a misbehaving identity provider
/// surfaces as an error.
#[derive(Debug, Clone)]
pub struct RequestAuthenticator {
    oauth: OauthClient,
}

impl RequestAuthenticator {
    pub fn new(cfg: &OauthConfig) -> anyhow::Result<Self> {
        Ok(Self {
            oauth: OauthClient::new(cfg)?,
        })
    }

    /// Wrap an already-built lookup client, e.g. one pointed at a test double.
    pub fn with_client(oauth: OauthClient) -> Self {
        Self { oauth }
    }

    pub async fn authenticate<B>(
        &self,
        request: Option<&mut Request<B>>,
    ) -> Result<(), AuthError> {
        let Some(request) = request else {
            return Ok(());
        };

        clean_request(request.headers_mut());

        let access_token_id = access_token_param(request.uri());
        if access_token_id.is_empty() {
            return Ok(());
        }

        let lookup = self.oauth.get_access_token(&access_token_id).await?;
        if lookup == Lookup::NotFound {
            debug!("access token not recognized, request proceeds anonymously");
        }
        apply_lookup(request.headers_mut(), &lookup);

        Ok(())
    }
}

/// First `access_token` query value, percent-decoded and trimmed.
fn access_token_param(uri: &Uri) -> String {
    uri.query()
        .and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == PARAM_ACCESS_TOKEN)
                .map(|(_, value)| value.trim().to_owned())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::access_token_param;
    use http::Uri;

    fn param(uri: &str) -> String {
        access_token_param(&uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn access_token_param_extraction() {
        assert_eq!(param("/items?access_token=abc"), "abc");
        assert_eq!(param("/items?foo=bar&access_token=abc&x=y"), "abc");
        // first occurrence wins
        assert_eq!(param("/items?access_token=first&access_token=second"), "first");
        // percent-decoded, then trimmed
        assert_eq!(param("/items?access_token=%20abc%20"), "abc");
        assert_eq!(param("/items?access_token=%20%20"), "");
        assert_eq!(param("/items?access_token="), "");
        assert_eq!(param("/items?other=1"), "");
        assert_eq!(param("/items"), "");
    }
}
