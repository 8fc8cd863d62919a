//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::sync::Arc;

use contact_client::{
    ContactDetails, MemoryCache, SubmissionCache, SubmissionClient, SubmissionPayload,
    SubmissionService,
};
use contact_config::DeliveryMode;

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Endpoint on a reserved port where nothing listens.
#[allow(dead_code)]
pub const REFUSED_ENDPOINT: &str = "http://localhost:1/contact";

/// A payload whose values would pass form validation.
#[allow(dead_code)]
pub fn valid_payload() -> SubmissionPayload {
    SubmissionPayload::capture(ContactDetails {
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        inquiry_type: "Support".to_string(),
        message: "My order has not arrived yet.".to_string(),
    })
}

#[allow(dead_code)]
pub fn client(endpoint: &str, mode: DeliveryMode) -> SubmissionClient {
    SubmissionClient::builder()
        .endpoint(endpoint.to_string())
        .mode(mode)
        .build()
        .expect("valid test client")
}

/// Service backed by an in-memory cache that the test can inspect.
#[allow(dead_code)]
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
