//! Configuration types for the contact form TUI.
//!
//! Responsibilities:
//! - Define the resolved `Config` handed to the client and the TUI.
//! - Define `DeliveryMode`, the deployment-time choice of endpoint contract.
//!
//! Does NOT handle:
//! - Loading values from env or `.env` files (see `loader` module).
//! - Any network activity (see the client crate).
//!
//! Invariants:
//! - `Config::endpoint` is an absolute http(s) URL once built by `ConfigLoader`.
//! - Durations are always non-zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// How the submission endpoint is integrated.
///
/// The mode decides both the transport contract and how the outcome is shown
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    /// The response status is observed. Failures fall back to the local cache
    /// and the outcome is shown as an inline status message.
    #[default]
    Readable,
    /// The response is never inspected. Every attempt is treated as delivered
    /// and confirmed with the success modal.
    FireAndForget,
}

impl DeliveryMode {
    /// Returns the canonical config string for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Readable => "readable",
            Self::FireAndForget => "fire-and-forget",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "readable" => Ok(Self::Readable),
            "fire-and-forget" | "fire_and_forget" | "no-cors" => Ok(Self::FireAndForget),
            other => Err(format!(
                "unknown delivery mode '{other}' (expected 'readable' or 'fire-and-forget')"
            )),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL the submission payload is POSTed to.
    pub endpoint: String,
    /// Endpoint integration contract.
    pub delivery_mode: DeliveryMode,
    /// Location of the local submission cache (JSON array file).
    pub cache_path: PathBuf,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// How long inline status messages stay visible.
    pub status_ttl: Duration,
}
