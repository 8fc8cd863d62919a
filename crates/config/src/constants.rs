//! Centralized constants for the contact form workspace.
//!
//! Default values shared by the config loader, the submission client and
//! the TUI live here so they are defined exactly once.

// =============================================================================
// Endpoint & Timeout Defaults
// =============================================================================

/// Default submission endpoint. Deployments are expected to override it.
pub const DEFAULT_ENDPOINT_URL: &str = "https://formspree.io/f/YOUR_FORM_ID";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Local Cache
// =============================================================================

/// File name of the local submission cache inside the data directory.
pub const CACHE_FILE_NAME: &str = "contactSubmissions.json";

/// Application name used to resolve platform directories.
pub const APP_DIR_NAME: &str = "contact-tui";

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// How long an inline status message stays visible, in seconds.
pub const DEFAULT_STATUS_TTL_SECS: u64 = 6;

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds. Drives status expiry and modal animation.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

/// Duration of the modal entrance and exit animations in milliseconds.
pub const MODAL_ANIMATION_MS: u64 = 200;
