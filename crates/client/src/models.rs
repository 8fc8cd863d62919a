//! Wire model for contact form submissions.
//!
//! The JSON body is `{fullName, email, phone, inquiryType, message, timestamp}`
//! with every value a string. The same shape is used for cached payloads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The five user-entered values of a contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub message: String,
}

/// A submission captured at a point in time.
///
/// Built fresh for every submit attempt and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    details: ContactDetails,
    timestamp: String,
}

impl SubmissionPayload {
    /// Create a payload stamped with the given capture time.
    pub fn new(details: ContactDetails, captured_at: DateTime<Utc>) -> Self {
        Self {
            details,
            timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Create a payload stamped with the current time.
    pub fn capture(details: ContactDetails) -> Self {
        Self::new(details, Utc::now())
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    /// ISO-8601 capture timestamp in UTC, e.g. `2026-10-19T08:30:00.123Z`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn details() -> ContactDetails {
        ContactDetails {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            inquiry_type: "Sales".to_string(),
            message: "Please share a quote for the annual plan.".to_string(),
        }
    }

    #[test]
    fn test_payload_wire_keys() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let payload = SubmissionPayload::new(details(), at);
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["email", "fullName", "inquiryType", "message", "phone", "timestamp"]
        );
        assert_eq!(obj["fullName"], "Asha Rao");
        assert_eq!(obj["phone"], "+91 98765 43210");
        assert_eq!(obj["timestamp"], "2026-10-19T08:30:00.000Z");
    }

    #[test]
    fn test_capture_timestamp_is_iso8601() {
        let payload = SubmissionPayload::capture(details());
        let parsed = DateTime::parse_from_rfc3339(payload.timestamp()).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(payload.timestamp().ends_with('Z'));
    }

    #[test]
    fn test_cached_payload_deserializes() {
        let json = r#"{"fullName":"A","email":"a@b.co","phone":"9876543210","inquiryType":"General","message":"0123456789","timestamp":"2026-01-01T00:00:00.000Z"}"#;
        let payload: SubmissionPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.details().email, "a@b.co");
        assert_eq!(payload.timestamp(), "2026-01-01T00:00:00.000Z");
    }
}
