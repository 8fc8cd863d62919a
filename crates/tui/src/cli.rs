//! Command-line argument parsing for contact-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Layer CLI overrides on top of a `ConfigLoader`.
//!
//! Does NOT handle:
//! - Environment variable or `.env` parsing (handled by `contact_config`).
//! - Terminal state management (see `runtime::terminal`).

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use contact_config::{ConfigLoader, DeliveryMode};

/// Command-line arguments for contact-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --endpoint, --mode)
/// 2. Environment variables (e.g., CONTACT_ENDPOINT_URL)
/// 3. `.env` file
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "contact-tui",
    about = "Terminal contact form with validation and resilient submission",
    version,
    after_help = "Examples:\n  contact-tui\n  contact-tui --endpoint https://formspree.io/f/abcd1234\n  contact-tui --mode fire-and-forget --no-mouse\n  contact-tui --cache-path ./submissions.json --log-dir /tmp/contact-logs\n"
)]
pub struct Cli {
    /// URL the form is POSTed to
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Delivery mode: readable or fire-and-forget
    #[arg(long)]
    pub mode: Option<DeliveryMode>,

    /// File that keeps submissions the endpoint did not confirm
    #[arg(long)]
    pub cache_path: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Apply the flags that were given to `loader`.
    pub fn apply_to(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(endpoint) = &self.endpoint {
            loader = loader.with_endpoint(endpoint.clone());
        }
        if let Some(mode) = self.mode {
            loader = loader.with_delivery_mode(mode);
        }
        if let Some(path) = &self.cache_path {
            loader = loader.with_cache_path(path.clone());
        }
        if let Some(secs) = self.timeout {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }
        loader
    }
}
