//! Error types used by the statecast core.
//!
//! The notification core has exactly one failure mode: publishing without a
//! state value. [`NotifyError`] captures it and provides helper methods
//! (`as_label`, `as_message`) for logging/metrics.
//!
//! Listener failures are **not** represented here: a listener that panics
//! during delivery propagates the panic straight out of
//! [`publish`](crate::Notifier::publish) and aborts the rest of the round.
//! The core performs no isolation, retry, or logging of that condition.

use thiserror::Error;

/// # Errors produced when publishing state.
///
/// Registration ([`subscribe`](crate::Notifier::subscribe) /
/// [`unsubscribe`](crate::Notifier::unsubscribe)) never fails; the only
/// validation the core performs happens at publish time.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyError {
    /// `publish` was called without a state value.
    ///
    /// A notification that carries no data is treated as a caller bug, not
    /// as an empty broadcast.
    #[error("state is not provided; ensure a valid state is passed")]
    InvalidState,
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use statecast::NotifyError;
    ///
    /// assert_eq!(NotifyError::InvalidState.as_label(), "notify_invalid_state");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::InvalidState => "notify_invalid_state",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::InvalidState => "no state value supplied to publish".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_stable() {
        assert_eq!(NotifyError::InvalidState.as_label(), "notify_invalid_state");
    }

    #[test]
    fn test_display_mentions_missing_state() {
        let msg = NotifyError::InvalidState.to_string();
        assert!(msg.contains("state is not provided"), "unexpected: {msg}");
    }
}
