//! Client builder for constructing [`SubmissionClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the required endpoint
//! - Configuring the underlying HTTP client (timeout)
//!
//! # Invariants
//! - `endpoint` is required and must be provided before calling `build()`

use std::time::Duration;

use contact_config::{Config, DeliveryMode, constants::DEFAULT_TIMEOUT_SECS};

use crate::client::SubmissionClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SubmissionClient`].
///
/// # Example
///
/// ```rust,ignore
/// use contact_client::SubmissionClient;
/// use contact_config::DeliveryMode;
///
/// let client = SubmissionClient::builder()
///     .endpoint("https://formspree.io/f/abc123".to_string())
///     .mode(DeliveryMode::Readable)
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct SubmissionClientBuilder {
    endpoint: Option<String>,
    mode: DeliveryMode,
    timeout: Duration,
}

impl Default for SubmissionClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            mode: DeliveryMode::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SubmissionClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the submission endpoint URL.
    pub fn endpoint(mut self, url: String) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Set the delivery mode.
    pub fn mode(mut self, mode: DeliveryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Populate the builder from a resolved [`Config`].
    pub fn from_config(self, config: &Config) -> Self {
        self.endpoint(config.endpoint.clone())
            .mode(config.delivery_mode)
            .timeout(config.timeout)
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidUrl` if no endpoint was set or it is not a URL.
    pub fn build(self) -> Result<SubmissionClient> {
        let endpoint = self
            .endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("endpoint is required".to_string()))?;

        reqwest::Url::parse(&endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{endpoint}: {e}")))?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(SubmissionClient {
            http,
            endpoint,
            mode: self.mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_endpoint() {
        let err = SubmissionClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_rejects_garbage_endpoint() {
        let err = SubmissionClientBuilder::new()
            .endpoint("not a url".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_config_copies_settings() {
        let config = Config {
            endpoint: "https://forms.example.com/f/abc".to_string(),
            delivery_mode: DeliveryMode::FireAndForget,
            cache_path: "cache.json".into(),
            timeout: Duration::from_secs(5),
            status_ttl: Duration::from_secs(6),
        };
        let client = SubmissionClientBuilder::new()
            .from_config(&config)
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "https://forms.example.com/f/abc");
        assert_eq!(client.mode(), DeliveryMode::FireAndForget);
    }
}
