//! Environment variable tests for the configuration loader.

use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::DeliveryMode;

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CONTACT_ENDPOINT_URL", Some("https://hooks.example.com/contact")),
            ("CONTACT_DELIVERY_MODE", Some("fire-and-forget")),
            ("CONTACT_CACHE_PATH", Some("/var/lib/contact/cache.json")),
            ("CONTACT_TIMEOUT", Some("12")),
            ("CONTACT_STATUS_TTL", Some("3")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.endpoint, "https://hooks.example.com/contact");
            assert_eq!(config.delivery_mode, DeliveryMode::FireAndForget);
            assert_eq!(
                config.cache_path,
                PathBuf::from("/var/lib/contact/cache.json")
            );
            assert_eq!(config.timeout, Duration::from_secs(12));
            assert_eq!(config.status_ttl, Duration::from_secs(3));
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CONTACT_ENDPOINT_URL", Some("https://env.example.com/contact")),
            ("CONTACT_DELIVERY_MODE", Some("fire-and-forget")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_cache_path(PathBuf::from("cache.json"))
                .from_env()
                .unwrap()
                .with_endpoint("https://cli.example.com/contact".to_string())
                .with_delivery_mode(DeliveryMode::Readable)
                .build()
                .unwrap();
            assert_eq!(config.endpoint, "https://cli.example.com/contact");
            assert_eq!(config.delivery_mode, DeliveryMode::Readable);
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CONTACT_ENDPOINT_URL", Some("")),
            ("CONTACT_DELIVERY_MODE", Some("   ")),
            ("CONTACT_CACHE_PATH", None),
        ],
        || {
            assert!(env_var_or_none("CONTACT_ENDPOINT_URL").is_none());
            let config = ConfigLoader::new()
                .with_cache_path(PathBuf::from("cache.json"))
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.endpoint, "https://formspree.io/f/YOUR_FORM_ID");
            assert_eq!(config.delivery_mode, DeliveryMode::Readable);
        },
    );
}

#[test]
#[serial]
fn test_invalid_delivery_mode_names_variable() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("CONTACT_DELIVERY_MODE", Some("carrier-pigeon"), || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, message } => {
                assert_eq!(var, "CONTACT_DELIVERY_MODE");
                assert!(message.contains("carrier-pigeon"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_timeout_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("CONTACT_TIMEOUT", Some("soon"), || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "CONTACT_TIMEOUT")
        );
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("CONTACT_ENDPOINT_URL", Some("  https://a.example.com  "), || {
        assert_eq!(
            env_var_or_none("CONTACT_ENDPOINT_URL").as_deref(),
            Some("https://a.example.com")
        );
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();

    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".env"),
        "CONTACT_ENDPOINT_URL=https://dotenv.example.com/contact\n",
    )
    .unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", Some("1")),
            ("CONTACT_ENDPOINT_URL", None::<&str>),
        ],
        || {
            let config = ConfigLoader::new()
                .with_cache_path(PathBuf::from("cache.json"))
                .load_dotenv()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.endpoint, "https://formspree.io/f/YOUR_FORM_ID");
        },
    );

    std::env::set_current_dir(original_dir).unwrap();
}
