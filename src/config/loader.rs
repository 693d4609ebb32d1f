use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use crate::config::settings::ServiceConfig;

/// Load and validate config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let raw = fs::read_to_string(path)?;
    let mut config: ServiceConfig = serde_yaml::from_str(&raw)?;

    // Trailing slashes would double up when the token path is appended
    config.oauth.base_url = config.oauth.base_url.trim_end_matches('/').to_owned();

    if config.oauth.base_url.is_empty() {
        bail!("oauth.base_url must not be empty");
    }
    if config.oauth.timeout_ms == 0 {
        bail!("oauth.timeout_ms must be greater than zero");
    }

    Ok(config)
}
