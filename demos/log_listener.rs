//! # Example: log_listener
//!
//! Demonstrates the built-in [`LogListener`], a stdout printer useful for
//! demos and debugging.
//!
//! ## Run
//! Requires the `logging` feature to export [`LogListener`].
//! ```bash
//! cargo run --example log_listener --features logging
//! ```

use std::sync::Arc;

use statecast::{LogListener, Notifier, NotifyError};

fn main() -> Result<(), NotifyError> {
    let notifier: Notifier<&str> = Notifier::new();
    notifier.subscribe(Arc::new(LogListener::new()));

    notifier.publish(Some("configured"))?;
    notifier.publish(Some("reloaded"))?;
    notifier.publish(Some("draining"))?;
    Ok(())
}
