use serde::Deserialize;

use crate::utils::constants::DEFAULT_OAUTH_TIMEOUT_MS;

/// ================================
/// Service configuration root
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub oauth: OauthConfig,
    pub settings: SettingsConfig,
}

/// Identity-provider endpoint used for token introspection.
///
/// Read-only after initialization; every authenticator call shares it.
#[derive(Debug, Deserialize, Clone)]
pub struct OauthConfig {
    pub base_url: String,
    /// Outbound lookup timeout. The only cancellation mechanism for the call.
    #[serde(default = "default_oauth_timeout_ms")]
    pub timeout_ms: u64,
}

/// ================================
/// Global service-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    pub server: ServerConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_oauth_timeout_ms() -> u64 {
    DEFAULT_OAUTH_TIMEOUT_MS
}
