use crate::domain::payment::Payment;
use crate::domain::ports::PaymentStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for donation records.
///
/// Uses `Arc<RwLock<HashMap<String, Payment>>>` so clones share state.
/// The lock exists to satisfy the `Send + Sync` port bound; the
/// processor still serializes all access per record.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<String, Payment>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn store(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.session_id().to_string(), payment);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(session_id).cloned())
    }

    async fn all(&self) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.values().cloned().collect())
    }
}
