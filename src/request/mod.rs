pub mod authenticator;
pub mod headers;
