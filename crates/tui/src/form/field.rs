//! Form field model.
//!
//! Responsibilities:
//! - Name the five fields of the contact form (`FieldId`) and their wire names.
//! - Hold each field's current value, error message and flagged state (`FormField`).
//! - List the selectable inquiry types.
//!
//! Does NOT handle:
//! - Deciding whether a value is valid (see `form::validation`).
//! - Rendering (see `ui::render`).
//!
//! Invariants:
//! - An empty `error` string means the field is valid.
//! - `flagged` is true exactly when `error` is non-empty.

use std::fmt;

/// Identifier of a contact form field, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    InquiryType,
    Message,
}

impl FieldId {
    /// All fields in the order they appear on the form.
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::InquiryType,
        FieldId::Message,
    ];

    /// Stable identifier, also the JSON key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::InquiryType => "inquiryType",
            Self::Message => "message",
        }
    }

    /// Human-readable label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::InquiryType => "Inquiry Type",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Your full name",
            Self::Email => "you@example.com",
            Self::Phone => "+91 98765 43210",
            Self::InquiryType => "Select an inquiry type (←/→)",
            Self::Message => "Tell us how we can help",
        }
    }

    /// Whether the field accepts free text. The inquiry type is a select.
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::InquiryType)
    }

    /// Whether the field is a multi-line text area.
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options offered by the inquiry type select. The empty value means "no selection".
pub const INQUIRY_TYPES: [&str; 4] = ["General", "Sales", "Support", "Partnership"];

/// Returns the inquiry type after `current` when cycling forwards (or backwards).
///
/// Cycling passes through the empty "no selection" state.
pub fn cycle_inquiry_type(current: &str, forward: bool) -> &'static str {
    let position = INQUIRY_TYPES.iter().position(|t| *t == current);
    let len = INQUIRY_TYPES.len();
    match (position, forward) {
        (None, true) => INQUIRY_TYPES[0],
        (None, false) => INQUIRY_TYPES[len - 1],
        (Some(i), true) if i + 1 == len => "",
        (Some(i), true) => INQUIRY_TYPES[i + 1],
        (Some(0), false) => "",
        (Some(i), false) => INQUIRY_TYPES[i - 1],
    }
}

/// A single field of the form and its display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    id: FieldId,
    value: String,
    error: String,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: String::new(),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Current error message, empty when the field is valid.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether the field is visually flagged as invalid.
    pub fn is_flagged(&self) -> bool {
        !self.error.is_empty()
    }

    /// Apply a validation result: a non-empty message flags the field, an empty one clears it.
    pub fn apply_validation(&mut self, message: String) -> bool {
        self.error = message;
        !self.is_flagged()
    }

    /// Clear the value and any validation state.
    pub fn reset(&mut self) {
        self.value.clear();
        self.error.clear();
    }
}
