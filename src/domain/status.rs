use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a donation in the Przelewy24 flow.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Initiated,
    Pending,
    Success,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    /// Whether the provider has reached a verdict on this donation.
    ///
    /// Decided states are protected from being dragged back to `Pending`
    /// by late or replayed notifications.
    pub fn is_decided(self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Cancelled)
    }

    /// Merges a classified notification into the current status.
    ///
    /// A `Pending` classification preserves a decided state; everything
    /// else replaces the current status. Note the asymmetry: `Success`
    /// and `Cancelled` are NOT protected from a later `Failed`, since
    /// the provider can report a reversal after confirming a payment.
    pub fn merge(self, classified: PaymentStatus) -> PaymentStatus {
        match classified {
            PaymentStatus::Pending if self.is_decided() => self,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initiated => "initiated",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
