//! Field validation rules.
//!
//! Each rule is a pure function of the current value and returns an empty
//! string when the value is valid, or a human-readable message otherwise.
//!
//! Invariants:
//! - Lengths are counted in characters after trimming surrounding whitespace.
//! - Phone numbers are matched after removing whitespace and hyphens.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::field::FieldId;

pub const FULL_NAME_ERROR: &str = "Full name is required (at least 2 characters)";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PHONE_ERROR: &str =
    "Please enter a valid 10-digit phone number (e.g., +91XXXXXXXXXX or 9XXXXXXXXX)";
pub const INQUIRY_TYPE_ERROR: &str = "Please select an inquiry type";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters long";

const MIN_FULL_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Optional +91 prefix, then a mobile number starting with 6-9.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+91)?[6-9][0-9]{9}$").expect("phone pattern is valid"));

fn ok() -> String {
    String::new()
}

pub fn validate_full_name(value: &str) -> String {
    if value.trim().chars().count() < MIN_FULL_NAME_CHARS {
        return FULL_NAME_ERROR.to_string();
    }
    ok()
}

pub fn validate_email(value: &str) -> String {
    if !EMAIL_RE.is_match(value) {
        return EMAIL_ERROR.to_string();
    }
    ok()
}

pub fn validate_phone(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if value.is_empty() || !PHONE_RE.is_match(&cleaned) {
        return PHONE_ERROR.to_string();
    }
    ok()
}

pub fn validate_inquiry_type(value: &str) -> String {
    if value.is_empty() {
        return INQUIRY_TYPE_ERROR.to_string();
    }
    ok()
}

pub fn validate_message(value: &str) -> String {
    if value.trim().chars().count() < MIN_MESSAGE_CHARS {
        return MESSAGE_ERROR.to_string();
    }
    ok()
}

/// Run the rule for `field` against `value`.
pub fn validate(field: FieldId, value: &str) -> String {
    match field {
        FieldId::FullName => validate_full_name(value),
        FieldId::Email => validate_email(value),
        FieldId::Phone => validate_phone(value),
        FieldId::InquiryType => validate_inquiry_type(value),
        FieldId::Message => validate_message(value),
    }
}
