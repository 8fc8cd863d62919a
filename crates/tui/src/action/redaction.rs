//! Redaction wrapper for Action logging.
//!
//! Form values are personal data (names, emails, phone numbers, free text).
//! Log actions with `RedactedAction(&action)` instead of `?action` so typed
//! characters and field values never reach the log file.

use crossterm::event::KeyCode;

use crate::action::variants::Action;
use crate::form::FormEvent;
use contact_client::SubmissionOutcome;

pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(key) => match key.code {
                KeyCode::Char(_) => write!(f, "Input(Char(<redacted>), {:?})", key.modifiers),
                code => write!(f, "Input({code:?}, {:?})", key.modifiers),
            },
            Action::Form(FormEvent::Input { field, value }) => {
                write!(f, "Form(Input {{ field: {field}, value: <{} chars> }})", value.chars().count())
            }
            Action::SubmissionFinished(outcome) => {
                let kind = match outcome {
                    SubmissionOutcome::Delivered => "Delivered",
                    SubmissionOutcome::DegradedSuccess { .. } => "DegradedSuccess",
                    SubmissionOutcome::Failed { .. } => "Failed",
                };
                write!(f, "SubmissionFinished({kind})")
            }
            other => write!(f, "{other:?}"),
        }
    }
}
