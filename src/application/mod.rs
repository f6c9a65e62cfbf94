//! Application layer orchestrating donation records over a store port.
//!
//! The `NotificationProcessor` is the entry point for replaying gateway
//! events: registrations create records, notifications resolve and
//! update them. Sequential awaits on the store keep record updates
//! single-writer.

pub mod event;
pub mod processor;
pub mod stats;
