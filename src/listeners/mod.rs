//! # State listeners.
//!
//! This module provides the [`Listen`] trait and the built-in
//! implementations that can be registered on a [`Notifier`](crate::Notifier).
//!
//! ## Architecture
//! ```text
//! State flow:
//!   caller ── publish(state) ──► Notifier ──► each registered listener, in order
//!                                                │
//!                                           ┌────┴─────┬───────────┐
//!                                           ▼          ▼           ▼
//!                                       FnListener  LogListener  Custom
//!                                       (closure)   (stdout)     (your impl)
//! ```
//!
//! ## Listener types
//! - **Callback adapters** - [`FnListener`] wraps a plain closure (optionally
//!   none at all) so no named type is needed.
//! - **Custom listeners** - any type implementing [`Listen`]; free to keep
//!   internal state, export metrics, trigger alerts.
//!
//! ## Implementing custom listeners
//! ```rust
//! use statecast::Listen;
//!
//! struct FailureCounter;
//!
//! impl Listen<u32> for FailureCounter {
//!     fn on_state(&self, state: &u32) {
//!         if *state > 0 {
//!             // increment failure counter
//!         }
//!     }
//! }
//! ```

mod fn_listener;
mod listen;

#[cfg(feature = "logging")]
mod log;

pub use fn_listener::FnListener;
pub use listen::{Listen, ListenerRef};

#[cfg(feature = "logging")]
pub use log::LogListener;
