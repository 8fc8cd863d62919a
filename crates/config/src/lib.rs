//! Configuration management for the contact form TUI.
//!
//! This crate provides the types and loader that resolve the submission
//! endpoint, delivery mode and local cache location from environment
//! variables, `.env` files and explicit overrides.

pub mod constants;
mod loader;
mod paths;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use paths::default_cache_path;
pub use types::{Config, DeliveryMode};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
