use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for donation records, keyed by P24 session id.
///
/// Ownership of record deletion stays with whatever layer implements
/// this trait; the application layer only creates and updates records.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn store(&self, payment: Payment) -> Result<()>;
    async fn get(&self, session_id: &str) -> Result<Option<Payment>>;
    async fn all(&self) -> Result<Vec<Payment>>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
