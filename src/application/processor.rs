use crate::application::event::DonationEvent;
use crate::domain::payload::ProviderPayload;
use crate::domain::payment::{Amount, Payment};
use crate::domain::ports::PaymentStoreBox;
use crate::domain::status::PaymentStatus;
use crate::error::{DonationError, Result};
use chrono::{DateTime, Utc};

/// The entry point for processing gateway events against the store.
///
/// Registrations create donation records in `initiated` state;
/// notifications resolve the record by the payload's `sessionId`,
/// cross-check the declared amount and currency, and apply the payload.
/// Store operations are awaited one at a time so record updates stay
/// sequentially consistent.
pub struct NotificationProcessor {
    store: PaymentStoreBox,
}

impl NotificationProcessor {
    pub fn new(store: PaymentStoreBox) -> Self {
        Self { store }
    }

    /// Records a freshly registered transaction as `initiated`.
    pub async fn register(
        &self,
        session_id: &str,
        amount: Amount,
        currency: &str,
        email: &str,
        created_at: DateTime<Utc>,
    ) -> Result<()> {
        let payment = Payment::new(session_id, amount, currency, email, created_at);
        self.store.store(payment).await?;
        tracing::info!(session_id, %amount, currency, "registered donation");
        Ok(())
    }

    /// Applies a provider notification to the donation it addresses.
    ///
    /// The notification must carry a `sessionId` matching a registered
    /// donation, and any amount or currency it declares must match the
    /// registration. A rejected notification leaves the record
    /// untouched; the status update itself cannot fail.
    pub async fn apply(&self, payload: &ProviderPayload) -> Result<PaymentStatus> {
        let session_id = payload.session_id().ok_or(DonationError::MissingSessionId)?;
        let mut payment = self
            .store
            .get(&session_id)
            .await?
            .ok_or_else(|| DonationError::UnknownSession(session_id.clone()))?;

        if let Some(declared) = payload.amount_minor()
            && declared != payment.amount().minor()
        {
            return Err(DonationError::NotificationMismatch {
                session_id,
                detail: format!(
                    "declared amount {declared} does not match registered {}",
                    payment.amount().minor()
                ),
            });
        }

        if let Some(declared) = payload.currency()
            && declared != payment.currency()
        {
            return Err(DonationError::NotificationMismatch {
                session_id,
                detail: format!(
                    "declared currency {declared} does not match registered {}",
                    payment.currency()
                ),
            });
        }

        let status = payment.apply_provider_payload(payload);
        self.store.store(payment).await?;
        tracing::debug!(%session_id, %status, "applied provider notification");
        Ok(status)
    }

    /// Dispatches one replayed event log entry.
    pub async fn process_event(&self, event: DonationEvent) -> Result<()> {
        match event {
            DonationEvent::Registered {
                session_id,
                amount,
                currency,
                email,
                created_at,
            } => {
                let created_at = created_at.unwrap_or_else(Utc::now);
                self.register(&session_id, amount, &currency, &email, created_at)
                    .await
            }
            DonationEvent::Notification { payload } => {
                self.apply(&payload).await?;
                Ok(())
            }
        }
    }

    /// Consumes the processor and returns the final state of all
    /// donations, ordered by registration time then session id.
    pub async fn into_results(self) -> Result<Vec<Payment>> {
        let mut payments = self.store.all().await?;
        payments.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.session_id().cmp(b.session_id()))
        });
        Ok(payments)
    }
}
