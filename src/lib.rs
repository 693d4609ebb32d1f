//! # Request Authentication Library
//!
//! Enriches incoming HTTP requests with a verified caller identity:
//! an `access_token` query parameter is exchanged against an OAuth
//! introspection endpoint and the result is injected as trust-boundary
//! headers (`X-Caller-Id`, `X-Client-Id`) for downstream handlers.
//!
//! Modules:
//! - `config` — service configuration (introspection endpoint, server, logging)
//! - `oauth` — introspection client and access-token data model
//! - `request` — header contract and the authentication pipeline
//! - `server` — axum middleware adapter and demo server

pub mod config;
pub mod errors;
pub mod oauth;
pub mod request;
pub mod server;
pub mod tests;
pub mod utils;

pub use crate::config::settings::{OauthConfig, ServiceConfig};
pub use crate::errors::AuthError;
pub use crate::oauth::access_token::AccessToken;
pub use crate::oauth::client::{Lookup, OauthClient};
pub use crate::request::authenticator::RequestAuthenticator;
pub use crate::request::headers::{caller_id, client_id, is_public};
