//! Tests for the configuration loader.
//!
//! Invariants / Assumptions:
//! - Tests touching the environment use `serial_test` and `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

mod env_tests;

pub(super) fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
