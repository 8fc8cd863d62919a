//! The contact form controller.
//!
//! Responsibilities:
//! - Own the five fields, the inline status, the submit control and the modal.
//! - Route subscribed [`FormEvent`]s to validation, submission and modal handlers.
//! - Turn a validated form into a [`SubmissionPayload`] and apply the
//!   [`SubmissionOutcome`] of the attempt.
//!
//! Does NOT handle:
//! - Network I/O. The caller runs the attempt (see `runtime::side_effects`)
//!   and reports back through [`ContactFormController::finish_submit`].
//! - Key or mouse decoding (see `app`).
//!
//! Invariants:
//! - A payload is produced only when every field validates at submit time.
//! - The submit control is disabled exactly while an attempt is in flight.

use std::time::{Duration, Instant};

use contact_client::{ContactDetails, SubmissionOutcome, SubmissionPayload, SubmissionService};
use contact_config::DeliveryMode;
use tracing::{debug, info, warn};

use crate::form::events::{EventSubscriptions, FormEvent};
use crate::form::field::{FieldId, FormField};
use crate::form::validation::validate;
use crate::ui::modal::ModalController;
use crate::ui::status::StatusDisplay;

pub const SUBMIT_LABEL: &str = "Send Inquiry";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str =
    "✓ Thank you! Your inquiry has been sent successfully. We will respond shortly.";
pub const BLOCKED_MESSAGE: &str = "Please fix the errors above before submitting.";
pub const FAILURE_MESSAGE: &str = "We could not send your inquiry. Please try again.";

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Blocked,
    Submitting,
    Success,
    DegradedSuccess,
    Failure,
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub enabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactFormController {
    fields: Vec<FormField>,
    subscriptions: EventSubscriptions,
    mode: DeliveryMode,
    modal: ModalController,
    status: StatusDisplay,
    submit: SubmitControl,
    phase: SubmissionPhase,
    last_result: Option<SubmissionPhase>,
}

impl ContactFormController {
    pub fn new(mode: DeliveryMode, modal: ModalController, status_ttl: Duration) -> Self {
        Self::with_subscriptions(mode, modal, status_ttl, EventSubscriptions::standard())
    }

    pub fn with_subscriptions(
        mode: DeliveryMode,
        modal: ModalController,
        status_ttl: Duration,
        subscriptions: EventSubscriptions,
    ) -> Self {
        Self {
            fields: FieldId::ALL.into_iter().map(FormField::new).collect(),
            subscriptions,
            mode,
            modal,
            status: StatusDisplay::new(status_ttl),
            submit: SubmitControl::default(),
            phase: SubmissionPhase::Idle,
            last_result: None,
        }
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[Self::index(id)]
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).value()
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalController {
        &mut self.modal
    }

    pub fn status(&self) -> &StatusDisplay {
        &self.status
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.submit
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// The terminal phase of the most recent submit attempt, if any.
    pub fn last_result(&self) -> Option<SubmissionPhase> {
        self.last_result
    }

    fn index(id: FieldId) -> usize {
        id as usize
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[Self::index(id)]
    }

    /// Handle one UI event.
    ///
    /// Returns a payload when the event was a submit that passed validation;
    /// the caller must deliver it and then call [`Self::finish_submit`].
    pub fn dispatch(&mut self, event: FormEvent, now: Instant) -> Option<SubmissionPayload> {
        // The value of a field changes whether or not anyone listens.
        if let FormEvent::Input { field, value } = &event {
            self.field_mut(*field).set_value(value.clone());
        }

        if !self.subscriptions.handles(&event) {
            return None;
        }

        match event {
            FormEvent::Blur(field) => {
                self.validate_field(field);
                None
            }
            FormEvent::Input { field, value } => {
                if !value.is_empty() {
                    self.validate_field(field);
                }
                None
            }
            FormEvent::Submit => self.begin_submit(now),
            FormEvent::CloseModal(trigger) => {
                if self.modal.close(now) {
                    debug!(?trigger, "Success modal closed");
                }
                None
            }
        }
    }

    /// Set a field's value without raising an input event.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.field_mut(field).set_value(value);
    }

    /// Validate one field and update its flag. Returns true when valid.
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        let message = validate(id, self.value(id));
        let valid = self.field_mut(id).apply_validation(message);
        debug!(field = %id, valid, "Field validated");
        valid
    }

    /// Validate every field. Returns true when all are valid.
    pub fn validate_all(&mut self) -> bool {
        // No short-circuit: every field must be flagged.
        FieldId::ALL
            .into_iter()
            .fold(true, |all, id| self.validate_field(id) && all)
    }

    /// Validate and, if everything passes, enter `Submitting`.
    ///
    /// Refused while an attempt is already in flight.
    pub fn begin_submit(&mut self, now: Instant) -> Option<SubmissionPayload> {
        if self.phase == SubmissionPhase::Submitting || !self.submit.enabled {
            debug!("Submit ignored while a submission is in flight");
            return None;
        }

        self.phase = SubmissionPhase::Validating;
        if !self.validate_all() {
            info!("Submission blocked by validation errors");
            self.status.error(BLOCKED_MESSAGE, now);
            self.last_result = Some(SubmissionPhase::Blocked);
            self.phase = SubmissionPhase::Idle;
            return None;
        }

        self.phase = SubmissionPhase::Submitting;
        self.submit = SubmitControl {
            label: SUBMITTING_LABEL,
            enabled: false,
        };

        let payload = SubmissionPayload::capture(self.details());
        info!(
            timestamp = payload.timestamp(),
            mode = %self.mode,
            "Submitting contact form"
        );
        Some(payload)
    }

    fn details(&self) -> ContactDetails {
        ContactDetails {
            full_name: self.value(FieldId::FullName).to_string(),
            email: self.value(FieldId::Email).to_string(),
            phone: self.value(FieldId::Phone).to_string(),
            inquiry_type: self.value(FieldId::InquiryType).to_string(),
            message: self.value(FieldId::Message).to_string(),
        }
    }

    /// Conclude the in-flight attempt with `outcome`.
    pub fn finish_submit(&mut self, outcome: &SubmissionOutcome, now: Instant) {
        // Restore the control before anything else, whatever happened.
        self.submit = SubmitControl::default();

        if self.phase != SubmissionPhase::Submitting {
            warn!(?outcome, "Submission outcome arrived with no attempt in flight");
            return;
        }

        let result = match outcome {
            SubmissionOutcome::Delivered => SubmissionPhase::Success,
            SubmissionOutcome::DegradedSuccess { .. } => SubmissionPhase::DegradedSuccess,
            SubmissionOutcome::Failed { .. } => SubmissionPhase::Failure,
        };

        if outcome.reports_success() {
            match self.mode {
                DeliveryMode::Readable => self.status.success(SUCCESS_MESSAGE, now),
                DeliveryMode::FireAndForget => self.modal.open(now),
            }
            self.reset();
        } else {
            self.status.error(FAILURE_MESSAGE, now);
        }

        self.last_result = Some(result);
        self.phase = SubmissionPhase::Idle;
    }

    /// Submit and deliver in one step.
    ///
    /// Returns `None` when the submit was blocked or refused.
    pub async fn submit_with(&mut self, service: &SubmissionService) -> Option<SubmissionOutcome> {
        let payload = self.dispatch(FormEvent::Submit, Instant::now())?;
        let outcome = service.deliver(&payload).await;
        self.finish_submit(&outcome, Instant::now());
        Some(outcome)
    }

    /// Clear values and flags of every field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// Expire the status and settle modal animations. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let status = self.status.prune(now);
        let modal = self.modal.tick(now);
        status || modal
    }
}
