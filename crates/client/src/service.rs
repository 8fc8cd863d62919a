//! Submission service: one attempt, one outcome.
//!
//! Applies the delivery-mode policy on top of [`SubmissionClient`]:
//!
//! | Mode | Endpoint result | Outcome |
//! |---|---|---|
//! | readable | 2xx | `Delivered` |
//! | readable | non-2xx or transport error, cache append ok | `DegradedSuccess` |
//! | readable | non-2xx or transport error, cache append failed | `Failed` |
//! | fire-and-forget | anything | `Delivered` |
//!
//! There are no retries. The cache append is the only fallback step.

use std::sync::Arc;

use contact_config::DeliveryMode;
use tracing::{error, info, warn};

use crate::cache::SubmissionCache;
use crate::client::{Delivery, SubmissionClient};
use crate::error::CacheError;
use crate::models::SubmissionPayload;

/// Result of a single submission attempt as seen by the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Confirmed by the endpoint, or assumed delivered in fire-and-forget mode.
    Delivered,
    /// The endpoint did not confirm receipt; the payload was kept locally.
    DegradedSuccess { reason: String },
    /// Neither the endpoint nor the local cache accepted the payload.
    Failed { reason: String },
}

impl SubmissionOutcome {
    /// Whether the user should be told the inquiry was sent.
    pub fn reports_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// Delivers payloads through the HTTP client with the local cache as fallback.
#[derive(Clone)]
pub struct SubmissionService {
    client: SubmissionClient,
    cache: Arc<dyn SubmissionCache>,
}

impl std::fmt::Debug for SubmissionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionService")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl SubmissionService {
    pub fn new(client: SubmissionClient, cache: Arc<dyn SubmissionCache>) -> Self {
        Self { client, cache }
    }

    pub fn mode(&self) -> DeliveryMode {
        self.client.mode()
    }

    /// Make one delivery attempt for `payload`.
    ///
    /// Never returns an error: every failure is folded into the outcome.
    pub async fn deliver(&self, payload: &SubmissionPayload) -> SubmissionOutcome {
        let result = self.client.submit(payload).await;

        match self.client.mode() {
            DeliveryMode::FireAndForget => {
                if let Err(e) = result {
                    warn!(error = %e, "Fire-and-forget submission failed unobserved");
                }
                SubmissionOutcome::Delivered
            }
            DeliveryMode::Readable => match result {
                Ok(Delivery::Confirmed { status }) => {
                    info!(status, "Contact submission delivered");
                    SubmissionOutcome::Delivered
                }
                Ok(Delivery::Unobserved) => SubmissionOutcome::Delivered,
                Err(e) => {
                    warn!(
                        error = %e,
                        endpoint = %self.client.endpoint(),
                        "Submission not confirmed, storing in local cache"
                    );
                    match self.append_to_cache(payload).await {
                        Ok(()) => SubmissionOutcome::DegradedSuccess {
                            reason: e.to_string(),
                        },
                        Err(cache_err) => {
                            error!(error = %cache_err, "Local cache fallback failed");
                            SubmissionOutcome::Failed {
                                reason: format!("{e}; {cache_err}"),
                            }
                        }
                    }
                }
            },
        }
    }

    async fn append_to_cache(&self, payload: &SubmissionPayload) -> Result<(), CacheError> {
        let cache = Arc::clone(&self.cache);
        let payload = payload.clone();
        match tokio::task::spawn_blocking(move || cache.append(&payload)).await {
            Ok(result) => result,
            Err(join_err) => Err(CacheError::Io {
                path: Default::default(),
                source: std::io::Error::other(join_err),
            }),
        }
    }
}
