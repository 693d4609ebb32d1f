use serde::Deserialize;

/// Identity-provider response for one token lookup.
///
/// Created transiently per authentication call and discarded once the
/// identity headers have been injected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    /// Opaque token identifier as issued by the provider.
    pub id: String,
    /// End-user behind the token.
    pub user_id: i64,
    /// Application the token was issued to.
    pub client_id: i64,
}
