//! Common test utilities for TUI integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Terminal rendering (see render_tests.rs)

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use contact_client::{
    CacheError, MemoryCache, SubmissionCache, SubmissionClient, SubmissionPayload,
    SubmissionService,
};
use contact_config::DeliveryMode;
use contact_tui::form::{ContactFormController, FieldId};
use contact_tui::ui::ModalController;

pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Endpoint on a reserved port where nothing listens.
pub const REFUSED_ENDPOINT: &str = "http://localhost:1/contact";

/// One value per field that passes validation.
pub const VALID_VALUES: [(FieldId, &str); 5] = [
    (FieldId::FullName, "Asha Rao"),
    (FieldId::Email, "asha@example.com"),
    (FieldId::Phone, "+91 98765 43210"),
    (FieldId::InquiryType, "Support"),
    (FieldId::Message, "My order has not arrived yet."),
];

pub fn controller(mode: DeliveryMode) -> ContactFormController {
    ContactFormController::new(mode, ModalController::default(), Duration::from_secs(6))
}

pub fn fill_valid(controller: &mut ContactFormController) {
    for (field, value) in VALID_VALUES {
        controller.set_value(field, value);
    }
}

pub fn client(endpoint: &str, mode: DeliveryMode) -> SubmissionClient {
    SubmissionClient::builder()
        .endpoint(endpoint.to_string())
        .mode(mode)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("valid test client")
}

/// Service backed by an in-memory cache that the test can inspect.
pub fn service_with_memory_cache(
    endpoint: &str,
    mode: DeliveryMode,
) -> (SubmissionService, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::new());
    let service = SubmissionService::new(
        client(endpoint, mode),
        Arc::clone(&cache) as Arc<dyn SubmissionCache>,
    );
    (service, cache)
}

/// A cache that refuses every write.
#[derive(Debug, Default)]
pub struct FailingCache;

impl SubmissionCache for FailingCache {
    fn append(&self, _payload: &SubmissionPayload) -> Result<(), CacheError> {
        Err(CacheError::Poisoned)
    }

    fn load(&self) -> Result<Vec<SubmissionPayload>, CacheError> {
        Ok(Vec::new())
    }
}

pub fn service_with_failing_cache(endpoint: &str) -> SubmissionService {
    SubmissionService::new(client(endpoint, DeliveryMode::Readable), Arc::new(FailingCache))
}

/// A cache whose writes panic.
#[derive(Debug, Default)]
pub struct PanickingCache;

impl SubmissionCache for PanickingCache {
    fn append(&self, _payload: &SubmissionPayload) -> Result<(), CacheError> {
        panic!("cache write panicked");
    }

    fn load(&self) -> Result<Vec<SubmissionPayload>, CacheError> {
        Ok(Vec::new())
    }
}

pub fn service_with_panicking_cache(endpoint: &str) -> SubmissionService {
    SubmissionService::new(
        client(endpoint, DeliveryMode::Readable),
        Arc::new(PanickingCache),
    )
}
