//! # Example: custom_listener
//!
//! Demonstrates how to build and register a hand-written listener type.
//!
//! Shows how to:
//! - Implement the [`Listen`] trait on your own struct.
//! - Register the same handle twice (two invocations per publish).
//! - Unsubscribe, which removes **every** occurrence of the handle.
//! - Use a silent [`FnListener`] as a placeholder listener.
//!
//! ## Run
//! ```bash
//! cargo run --example custom_listener
//! ```

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use statecast::{FnListener, Listen, ListenerRef, Notifier, NotifyError};

/// Counts readings above a fixed threshold.
/// In real life, you could export metrics, ship logs, or trigger alerts.
struct ThresholdAlarm {
    threshold: i64,
    trips: AtomicU32,
}

impl Listen<i64> for ThresholdAlarm {
    fn on_state(&self, state: &i64) {
        if *state > self.threshold {
            let n = self.trips.fetch_add(1, Ordering::Relaxed) + 1;
            println!("[{}] reading {} over {} (trip #{n})", self.name(), state, self.threshold);
        }
    }

    fn name(&self) -> &'static str {
        "threshold-alarm"
    }
}

fn main() -> Result<(), NotifyError> {
    let readings: Notifier<i64> = Notifier::new();

    let alarm: ListenerRef<i64> = Arc::new(ThresholdAlarm {
        threshold: 100,
        trips: AtomicU32::new(0),
    });

    // Registered twice: each publish trips the alarm twice.
    readings.subscribe(Arc::clone(&alarm));
    readings.subscribe(Arc::clone(&alarm));

    // A silent adapter is a legal "do nothing" listener.
    readings.subscribe(Arc::new(FnListener::silent()));

    readings.publish(Some(240))?;
    readings.publish(Some(7))?;

    // One unsubscribe drops both registrations of the alarm.
    readings.unsubscribe(&alarm);
    println!("listeners left after unsubscribe: {}", readings.len());

    readings.publish(Some(500))?; // only the silent adapter remains
    Ok(())
}
