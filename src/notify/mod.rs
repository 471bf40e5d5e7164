//! # Notification subject: registry and synchronous fan-out.
//!
//! This module groups the subject side of the pattern: [`Notifier`] owns the
//! ordered listener registry and drives delivery.
//!
//! ## Quick reference
//! - **Publishers**: any code holding a [`Notifier`] (or a clone of it).
//! - **Consumers**: [`Listen`](crate::Listen) implementations registered via
//!   [`Notifier::subscribe`].
//!
//! See `listeners/mod.rs` for the consumer-side contract.

mod notifier;

pub use notifier::Notifier;
