//! # Example: basic
//!
//! Demonstrates the smallest useful setup: closure-backed listeners on a
//! fresh [`Notifier`].
//!
//! Shows how to:
//! - Wrap plain closures with [`FnListener`].
//! - Publish state and observe synchronous, in-order delivery.
//! - Hit the publish-time guard for a missing state value.
//!
//! ## Flow
//! ```text
//! main ──► Notifier::new()
//!     ├─► subscribe(FnListener)   x2
//!     ├─► publish(Some(5))  ──► doubler, bumper (in that order)
//!     └─► publish(None)     ──► Err(InvalidState), nobody invoked
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use statecast::{FnListener, ListenerRef, Notifier, NotifyError};

fn main() -> Result<(), NotifyError> {
    let notifier = Notifier::new();

    let doubler: ListenerRef<i32> = FnListener::arc(|state: &i32| {
        println!("[doubler] {} -> {}", state, state * 2);
    });
    let bumper: ListenerRef<i32> = FnListener::arc(|state: &i32| {
        println!("[bumper]  {} -> {}", state, state + 1);
    });

    notifier.subscribe(doubler);
    notifier.subscribe(bumper);

    notifier.publish(Some(5))?;

    // A notification with no data is a caller bug, rejected up front.
    match notifier.publish(None) {
        Err(e) => println!("[guard] rejected: {e} (label={})", e.as_label()),
        Ok(()) => unreachable!("publishing without a state must fail"),
    }

    Ok(())
}
