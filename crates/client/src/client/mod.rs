//! HTTP submission client.
//!
//! # What this module handles:
//! - POSTing a [`SubmissionPayload`] as JSON to the configured endpoint
//! - Interpreting the response according to the [`DeliveryMode`]
//!
//! # What this module does NOT handle:
//! - Falling back to the local cache (see [`crate::service`])
//! - Retries. A submission is attempted exactly once.
//!
//! # Invariants
//! - Every request carries `Content-Type: application/json`
//! - In fire-and-forget mode the response status and body are never read

pub mod builder;

use contact_config::DeliveryMode;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SubmissionPayload;

/// How much the client learned about a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The endpoint acknowledged the submission with a success status.
    Confirmed { status: u16 },
    /// The request was sent but its result was deliberately not observed.
    Unobserved,
}

/// Client for the contact form submission endpoint.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) mode: DeliveryMode,
}

impl SubmissionClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SubmissionClientBuilder {
        builder::SubmissionClientBuilder::new()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// POST the payload to the endpoint.
    ///
    /// # Errors
    /// - `ClientError::HttpError` on transport failure in either mode
    /// - `ClientError::ApiError` on a non-2xx status (readable mode only)
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<Delivery> {
        debug!(
            endpoint = %self.endpoint,
            mode = %self.mode,
            timestamp = payload.timestamp(),
            "Posting contact submission"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        if self.mode == DeliveryMode::FireAndForget {
            return Ok(Delivery::Unobserved);
        }

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Submission accepted");
            return Ok(Delivery::Confirmed {
                status: status.as_u16(),
            });
        }

        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

        Err(ClientError::ApiError {
            status: status.as_u16(),
            url: self.endpoint.clone(),
            message,
        })
    }
}
