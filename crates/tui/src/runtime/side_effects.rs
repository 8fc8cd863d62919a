//! Background delivery of validated submissions.
//!
//! Responsibilities:
//! - Run one `SubmissionService::deliver` call off the UI task.
//! - Report back exactly one `Action::SubmissionFinished` per attempt.
//!
//! Does NOT handle:
//! - Deciding whether to submit (see `ContactFormController::begin_submit`).
//! - Retries or cancellation; an attempt runs until the client timeout.
//!
//! Invariants:
//! - With unwinding panics, a panicking delivery still produces a `Failed`
//!   outcome, so the submit control is re-enabled. Release builds use
//!   `panic = "abort"`, where a panic ends the process instead.

use std::time::Instant;

use contact_client::{SubmissionOutcome, SubmissionPayload, SubmissionService};
use tokio::sync::mpsc::Sender;
pub use tokio_util::task::TaskTracker;
use tracing::{Instrument, error, info_span};

use crate::action::Action;

/// Deliver `payload` in a tracked background task.
pub fn spawn_submission(
    service: SubmissionService,
    payload: SubmissionPayload,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
) {
    let span = info_span!(
        "tui.submission",
        timestamp = payload.timestamp(),
        duration_ms = tracing::field::Empty,
    );

    task_tracker.spawn(
        async move {
            let start = Instant::now();
            let delivery = tokio::spawn(async move { service.deliver(&payload).await });
            let outcome = match delivery.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(error = %e, "Submission task did not complete");
                    SubmissionOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            tracing::Span::current().record("duration_ms", start.elapsed().as_millis() as i64);

            if tx.send(Action::SubmissionFinished(outcome)).await.is_err() {
                tracing::debug!("Action channel closed before submission finished");
            }
        }
        .instrument(span),
    );
}
