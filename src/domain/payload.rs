use crate::domain::status::PaymentStatus;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Fallback failure reason when a payload carries no error fields at all.
pub const FALLBACK_FAILURE_REASON: &str = "Przelewy24 returned an error state.";

/// A raw Przelewy24 notification or verification response body.
///
/// P24 delivers these as JSON or form-encoded key/value pairs; by the
/// time they reach this crate the transport layer has already parsed
/// them into a string-keyed mapping. No schema is enforced beyond key
/// lookup, so a payload can never fail to classify.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ProviderPayload(Map<String, Value>);

impl ProviderPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Normalizes the provider's raw status text into a status bucket.
    ///
    /// The status is read from `status`, falling back to `trn_status`
    /// (P24 uses either, depending on the endpoint), compared
    /// case-insensitively. Anything unrecognized, including a missing
    /// or empty field, classifies as `Failed`: an unknown provider
    /// response must never keep a donation looking `initiated`.
    pub fn classify(&self) -> PaymentStatus {
        let raw = self
            .text_field("status")
            .or_else(|| self.text_field("trn_status"))
            .unwrap_or_default()
            .to_lowercase();

        match raw.as_str() {
            "success" | "confirmed" => PaymentStatus::Success,
            "pending" | "processing" | "waiting_for_confirmation" => PaymentStatus::Pending,
            "cancelled" | "abandoned" => PaymentStatus::Cancelled,
            _ => PaymentStatus::Failed,
        }
    }

    /// Extracts a human-readable error description, independent of
    /// classification.
    ///
    /// The code is read from `errorCode` falling back to `error`, the
    /// description from `errorDescription` falling back to `reason`.
    /// Both present combine as `"<code>: <description>"`.
    pub fn error_text(&self) -> Option<String> {
        let code = self
            .text_field("errorCode")
            .or_else(|| self.text_field("error"));
        let description = self
            .text_field("errorDescription")
            .or_else(|| self.text_field("reason"));

        match (code, description) {
            (Some(code), Some(description)) => Some(format!("{code}: {description}")),
            (Some(code), None) => Some(code),
            (None, Some(description)) => Some(description),
            (None, None) => None,
        }
    }

    /// The `sessionId` the notification addresses, when present.
    pub fn session_id(&self) -> Option<String> {
        self.text_field("sessionId")
    }

    /// The amount the notification declares, in minor units (grosze).
    pub fn amount_minor(&self) -> Option<i64> {
        match self.0.get("amount")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The currency code the notification declares.
    pub fn currency(&self) -> Option<String> {
        self.text_field("currency")
    }

    // Field lookup with the original's loose typing: nulls and empty
    // strings count as absent, non-string scalars render as their JSON
    // text.
    fn text_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Map<String, Value>> for ProviderPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ProviderPayload {
        serde_json::from_value(value).expect("payload must be a JSON object")
    }

    #[test]
    fn test_classify_success_values() {
        for raw in ["success", "confirmed", "SUCCESS", "Confirmed"] {
            assert_eq!(
                payload(json!({ "status": raw })).classify(),
                PaymentStatus::Success,
                "status text {raw:?}"
            );
        }
    }

    #[test]
    fn test_classify_pending_values() {
        for raw in ["pending", "processing", "waiting_for_confirmation", "Pending"] {
            assert_eq!(
                payload(json!({ "status": raw })).classify(),
                PaymentStatus::Pending,
                "status text {raw:?}"
            );
        }
    }

    #[test]
    fn test_classify_cancelled_values() {
        for raw in ["cancelled", "abandoned", "CANCELLED"] {
            assert_eq!(
                payload(json!({ "status": raw })).classify(),
                PaymentStatus::Cancelled,
                "status text {raw:?}"
            );
        }
    }

    #[test]
    fn test_classify_defaults_to_failed() {
        assert_eq!(
            payload(json!({ "status": "error" })).classify(),
            PaymentStatus::Failed
        );
        assert_eq!(
            payload(json!({ "status": "" })).classify(),
            PaymentStatus::Failed
        );
        assert_eq!(payload(json!({})).classify(), PaymentStatus::Failed);
    }

    #[test]
    fn test_classify_falls_back_to_trn_status() {
        assert_eq!(
            payload(json!({ "trn_status": "success" })).classify(),
            PaymentStatus::Success
        );
        // Empty primary key falls through to the secondary one.
        assert_eq!(
            payload(json!({ "status": "", "trn_status": "pending" })).classify(),
            PaymentStatus::Pending
        );
        assert_eq!(
            payload(json!({ "status": null, "trn_status": "confirmed" })).classify(),
            PaymentStatus::Success
        );
    }

    #[test]
    fn test_classify_non_string_status() {
        // A numeric status code is stringified, matches nothing known.
        assert_eq!(
            payload(json!({ "status": 200 })).classify(),
            PaymentStatus::Failed
        );
    }

    #[test]
    fn test_error_text_combines_code_and_description() {
        let p = payload(json!({ "errorCode": "100", "errorDescription": "Rejected" }));
        assert_eq!(p.error_text(), Some("100: Rejected".to_string()));
    }

    #[test]
    fn test_error_text_single_field() {
        assert_eq!(
            payload(json!({ "errorCode": "100" })).error_text(),
            Some("100".to_string())
        );
        assert_eq!(
            payload(json!({ "reason": "card declined" })).error_text(),
            Some("card declined".to_string())
        );
    }

    #[test]
    fn test_error_text_fallback_keys() {
        let p = payload(json!({ "error": "err_42", "reason": "timeout" }));
        assert_eq!(p.error_text(), Some("err_42: timeout".to_string()));
    }

    #[test]
    fn test_error_text_absent() {
        assert_eq!(payload(json!({ "status": "error" })).error_text(), None);
    }

    #[test]
    fn test_error_text_numeric_code() {
        let p = payload(json!({ "errorCode": 100, "errorDescription": "Rejected" }));
        assert_eq!(p.error_text(), Some("100: Rejected".to_string()));
    }

    #[test]
    fn test_notification_accessors() {
        let p = payload(json!({
            "sessionId": "donation_abc",
            "amount": 1500,
            "currency": "PLN",
        }));
        assert_eq!(p.session_id(), Some("donation_abc".to_string()));
        assert_eq!(p.amount_minor(), Some(1500));
        assert_eq!(p.currency(), Some("PLN".to_string()));

        // Form-encoded callbacks deliver the amount as a string.
        let p = payload(json!({ "amount": "1500" }));
        assert_eq!(p.amount_minor(), Some(1500));
    }
}
