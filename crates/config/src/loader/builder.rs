//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Validate the endpoint URL and timing bounds.
//! - Build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods applied after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ENDPOINT_URL, DEFAULT_STATUS_TTL_SECS, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::paths::default_cache_path;
use crate::types::{Config, DeliveryMode};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    endpoint: Option<String>,
    delivery_mode: Option<DeliveryMode>,
    cache_path: Option<PathBuf>,
    timeout: Option<Duration>,
    status_ttl: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("DOTENV_DISABLED set, skipping .env");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the submission endpoint URL.
    pub fn with_endpoint(mut self, url: String) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Set the delivery mode.
    pub fn with_delivery_mode(mut self, mode: DeliveryMode) -> Self {
        self.delivery_mode = Some(mode);
        self
    }

    /// Set the local cache file path.
    pub fn with_cache_path(mut self, path: PathBuf) -> Self {
        self.cache_path = Some(path);
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set how long inline status messages stay visible.
    pub fn with_status_ttl(mut self, ttl: Duration) -> Self {
        self.status_ttl = Some(ttl);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let endpoint = validate_endpoint(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT_URL))?;

        let cache_path = match self.cache_path {
            Some(path) => path,
            None => default_cache_path()
                .map_err(|e| ConfigError::DataDirUnavailable(e.to_string()))?,
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        let status_ttl = self
            .status_ttl
            .unwrap_or(Duration::from_secs(DEFAULT_STATUS_TTL_SECS));
        if status_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                var: "status_ttl".to_string(),
                message: "must be greater than 0 seconds".to_string(),
            });
        }

        let delivery_mode = self.delivery_mode.unwrap_or_default();
        tracing::debug!(%endpoint, %delivery_mode, cache_path = %cache_path.display(), "Resolved configuration");

        Ok(Config {
            endpoint,
            delivery_mode,
            cache_path,
            timeout,
            status_ttl,
        })
    }

    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn set_endpoint(&mut self, url: Option<String>) {
        self.endpoint = url;
    }

    pub(crate) fn set_delivery_mode(&mut self, mode: Option<DeliveryMode>) {
        self.delivery_mode = mode;
    }

    pub(crate) fn set_cache_path(&mut self, path: Option<PathBuf>) {
        self.cache_path = path;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_status_ttl(&mut self, ttl: Option<Duration>) {
        self.status_ttl = ttl;
    }
}

/// Validate the endpoint URL. The path is kept as given since form services
/// route on it.
fn validate_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "endpoint".into(),
        message: format!("must be an absolute http(s) URL (e.g. https://formspree.io/f/abc): {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.to_string())
}
