//! # Core listener trait
//!
//! `Listen` is the extension point for plugging custom state handlers into a
//! [`Notifier`](crate::Notifier). Each registered listener is invoked
//! synchronously, in registration order, on the publishing caller's thread.
//!
//! ## Contract
//! - Implementations should be **fast**: the notifier blocks on each call in
//!   turn, so a slow listener delays everyone registered after it.
//! - Implementations may have arbitrary side effects; that is the point of
//!   the pattern.
//! - A panic inside [`Listen::on_state`] propagates out of the in-flight
//!   `publish` call and aborts delivery to the remaining listeners.
//!
//! ## Example (skeleton)
//! ```rust
//! use statecast::Listen;
//!
//! struct Audit;
//!
//! impl Listen<String> for Audit {
//!     fn on_state(&self, state: &String) {
//!         // write audit record...
//!         let _ = state;
//!     }
//!     fn name(&self) -> &'static str { "audit" }
//! }
//! ```

use std::sync::Arc;

/// Contract for state listeners.
///
/// Called from the publishing thread. The state value is lent for the
/// duration of the call only; listeners that need to keep it must clone it.
pub trait Listen<T>: Send + Sync + 'static {
    /// Handle a newly published state value.
    ///
    /// # Parameters
    /// - `state`: reference to the published value (does not transfer ownership)
    fn on_state(&self, state: &T);

    /// Human-readable name (for logs/diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a listener (`Arc<dyn Listen<T>>`).
///
/// The notifier holds listeners through this handle and never owns their
/// lifetime: callers keep their own clone and pass it back to
/// [`unsubscribe`](crate::Notifier::unsubscribe) when done. Removal matches
/// clones of the **same** handle (pointer identity), not structural equality.
pub type ListenerRef<T> = Arc<dyn Listen<T>>;
