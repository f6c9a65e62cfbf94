use crate::domain::payload::ProviderPayload;
use crate::domain::payment::Amount;
use chrono::{DateTime, Utc};
use serde::Deserialize;

fn default_currency() -> String {
    "PLN".to_string()
}

/// One entry of a replayable donation event log.
///
/// `registered` mirrors the moment a transaction is registered with the
/// gateway and logged as `initiated`; `notification` carries the raw
/// provider payload exactly as P24 delivered it, `sessionId` included.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DonationEvent {
    Registered {
        session_id: String,
        amount: Amount,
        #[serde(default = "default_currency")]
        currency: String,
        email: String,
        #[serde(default)]
        created_at: Option<DateTime<Utc>>,
    },
    Notification {
        #[serde(flatten)]
        payload: ProviderPayload,
    },
}
