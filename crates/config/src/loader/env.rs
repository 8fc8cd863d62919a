//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CONTACT_*` environment variables.
//! - Apply their values to a `ConfigLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue` naming the variable.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::DeliveryMode;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_secs(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a whole number of seconds".to_string(),
    })?;
    Ok(Duration::from_secs(secs))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("CONTACT_ENDPOINT_URL") {
        loader.set_endpoint(Some(url));
    }
    if let Some(mode) = env_var_or_none("CONTACT_DELIVERY_MODE") {
        let mode: DeliveryMode = mode.parse().map_err(|message| ConfigError::InvalidValue {
            var: "CONTACT_DELIVERY_MODE".to_string(),
            message,
        })?;
        loader.set_delivery_mode(Some(mode));
    }
    if let Some(path) = env_var_or_none("CONTACT_CACHE_PATH") {
        loader.set_cache_path(Some(PathBuf::from(path)));
    }
    if let Some(timeout) = env_var_or_none("CONTACT_TIMEOUT") {
        loader.set_timeout(Some(parse_secs("CONTACT_TIMEOUT", &timeout)?));
    }
    if let Some(ttl) = env_var_or_none("CONTACT_STATUS_TTL") {
        loader.set_status_ttl(Some(parse_secs("CONTACT_STATUS_TTL", &ttl)?));
    }
    Ok(())
}
