//! # LogListener — simple state printer
//!
//! A minimal listener that prints each published state to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [notify] state=5
//! [notify] state="reconfigured"
//! ```

use std::fmt::Debug;

use crate::listeners::listen::Listen;

/// State printer listener.
///
/// Enabled via the `logging` feature. Prints a human-readable line per
/// delivery for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Listen`] for
/// structured logging or metrics collection.
#[derive(Default)]
pub struct LogListener;

impl LogListener {
    /// Construct a new [`LogListener`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Debug + 'static> Listen<T> for LogListener {
    fn on_state(&self, state: &T) {
        println!("[notify] state={state:?}");
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
