use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::form::{FieldId, FormEvent};
use contact_client::SubmissionOutcome;

#[test]
fn test_redacts_typed_characters() {
    let action = Action::Input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
    let output = format!("{:?}", RedactedAction(&action));

    assert!(!output.contains("'x'"));
    assert!(output.contains("<redacted>"));
}

#[test]
fn test_keeps_navigation_keys() {
    let action = Action::Input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    let output = format!("{:?}", RedactedAction(&action));

    assert!(output.contains("Tab"));
}

#[test]
fn test_redacts_field_values() {
    let action = Action::Form(FormEvent::Input {
        field: FieldId::Email,
        value: "asha@example.com".to_string(),
    });
    let output = format!("{:?}", RedactedAction(&action));

    assert!(!output.contains("asha@example.com"));
    assert!(output.contains("email"));
    assert!(output.contains("<16 chars>"));
}

#[test]
fn test_outcome_reason_is_not_logged() {
    let action = Action::SubmissionFinished(SubmissionOutcome::Failed {
        reason: "Permission denied: /home/asha/.local/share".to_string(),
    });
    let output = format!("{:?}", RedactedAction(&action));

    assert_eq!(output, "SubmissionFinished(Failed)");
}

#[test]
fn test_simple_variants_pass_through() {
    assert_eq!(format!("{:?}", RedactedAction(&Action::Tick)), "Tick");
    assert_eq!(
        format!("{:?}", RedactedAction(&Action::Resize(80, 24))),
        "Resize(80, 24)"
    );
}
