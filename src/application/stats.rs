use crate::domain::payment::Payment;
use crate::domain::status::PaymentStatus;
use rust_decimal::Decimal;
use std::fmt;

/// Aggregate counts over a set of donation records, plus the summed
/// amount of confirmed donations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DonationStats {
    pub total: usize,
    pub succeeded: usize,
    pub pending: usize,
    pub initiated: usize,
    pub failed: usize,
    pub cancelled: usize,
    confirmed_minor: i64,
}

impl DonationStats {
    pub fn collect<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> Self {
        let mut stats = Self::default();
        for payment in payments {
            stats.total += 1;
            match payment.status() {
                PaymentStatus::Success => {
                    stats.succeeded += 1;
                    stats.confirmed_minor += payment.amount().minor();
                }
                PaymentStatus::Pending => stats.pending += 1,
                PaymentStatus::Initiated => stats.initiated += 1,
                PaymentStatus::Failed => stats.failed += 1,
                PaymentStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }

    /// Total confirmed amount in major units.
    pub fn confirmed_total(&self) -> Decimal {
        Decimal::new(self.confirmed_minor, 2)
    }
}

impl fmt::Display for DonationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total transactions: {}", self.total)?;
        writeln!(f, "Success: {}", self.succeeded)?;
        writeln!(f, "Pending: {}", self.pending)?;
        writeln!(f, "Initiated: {}", self.initiated)?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f, "Cancelled: {}", self.cancelled)?;
        write!(f, "Confirmed amount: {}", self.confirmed_total())
    }
}
