//! Path helpers for the local submission cache.
//!
//! Uses the `directories` crate for platform-appropriate locations:
//! - Linux: `~/.local/share/contact-tui/contactSubmissions.json`
//! - macOS: `~/Library/Application Support/contact-tui/contactSubmissions.json`
//! - Windows: `%AppData%\contact-tui\data\contactSubmissions.json`

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CACHE_FILE_NAME};

/// Returns the default path of the local submission cache file.
pub fn default_cache_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.data_dir().join(CACHE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_path_uses_data_dir() {
        let expected = directories::ProjectDirs::from("", "", APP_DIR_NAME)
            .unwrap()
            .data_dir()
            .join(CACHE_FILE_NAME);

        let actual = default_cache_path().unwrap();
        assert_eq!(actual, expected);
        assert!(actual.ends_with(CACHE_FILE_NAME));
    }
}
