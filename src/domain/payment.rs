use crate::domain::payload::{FALLBACK_FAILURE_REASON, ProviderPayload};
use crate::domain::status::PaymentStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A donated amount in minor units (grosze).
///
/// P24 registers and notifies amounts as integer grosze; conversion to
/// a decimal value happens only at the display boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    /// Decimal value in major units, e.g. `1500` grosze -> `15.00`.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

/// A single donation tracked through the Przelewy24 flow.
///
/// Created when the transaction is registered with the gateway, then
/// mutated only by applying provider payloads (synchronous verification
/// responses or asynchronous webhook notifications).
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    session_id: String,
    amount: Amount,
    currency: String,
    email: String,
    created_at: DateTime<Utc>,
    status: PaymentStatus,
    failure_reason: Option<String>,
    status_history: Vec<PaymentStatus>,
}

impl Payment {
    pub fn new(
        session_id: impl Into<String>,
        amount: Amount,
        currency: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            amount,
            currency: currency.into(),
            email: email.into(),
            created_at,
            status: PaymentStatus::Initiated,
            failure_reason: None,
            status_history: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// Updates the status from a Przelewy24 response or webhook body.
    ///
    /// Every payload maps to some status; garbage classifies as
    /// `Failed` rather than leaving the donation `initiated`. The
    /// resulting status is appended to the history even when the
    /// pending-suppression rule left it unchanged.
    pub fn apply_provider_payload(&mut self, payload: &ProviderPayload) -> PaymentStatus {
        let classified = payload.classify();
        self.status = self.status.merge(classified);

        match classified {
            PaymentStatus::Success | PaymentStatus::Cancelled => self.failure_reason = None,
            PaymentStatus::Failed => {
                self.failure_reason = Some(
                    payload
                        .error_text()
                        .unwrap_or_else(|| FALLBACK_FAILURE_REASON.to_string()),
                );
            }
            // Pending leaves any earlier failure reason in place.
            _ => {}
        }

        self.status_history.push(self.status);
        self.status
    }

    /// Concise, user-facing summary for the donation list.
    pub fn history_entry(&self) -> String {
        let base = format!("Payment {} — {}", self.session_id, self.status);
        match &self.failure_reason {
            Some(reason) if self.status == PaymentStatus::Failed => {
                format!("{base} (reason: {reason})")
            }
            _ => base,
        }
    }

    /// Every status recorded so far, oldest first. Read-only view; the
    /// backing vector is not reachable from outside.
    pub fn status_history(&self) -> &[PaymentStatus] {
        &self.status_history
    }
}
