use crate::domain::payment::Payment;
use crate::error::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One donation rendered as a row of the CSV summary.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    session_id: &'a str,
    created_at: DateTime<Utc>,
    amount: Decimal,
    currency: &'a str,
    email: &'a str,
    status: &'a str,
    reason: Option<&'a str>,
}

impl<'a> From<&'a Payment> for SummaryRow<'a> {
    fn from(payment: &'a Payment) -> Self {
        Self {
            session_id: payment.session_id(),
            created_at: payment.created_at(),
            amount: payment.amount().to_decimal(),
            currency: payment.currency(),
            email: payment.email(),
            status: payment.status().as_str(),
            reason: payment.failure_reason(),
        }
    }
}

/// Writes final donation states as CSV to any `Write` sink.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_payments(&mut self, payments: &[Payment]) -> Result<()> {
        for payment in payments {
            self.writer.serialize(SummaryRow::from(payment))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
