//! # statecast
//!
//! **Statecast** is a small synchronous state notification library for Rust.
//!
//! It provides the classic subject/listener primitive: a [`Notifier`] keeps
//! an ordered registry of listeners and fans each published state value out
//! to them, in registration order, on the publishing caller's own thread.
//! The crate is designed as an in-process building block for higher-level
//! components; it knows nothing about what triggers a publish (timers, user
//! input, other events).
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//!     │   caller A   │     │   caller B   │     │ listener w/  │
//!     │ publish(..)  │     │ publish(..)  │     │ Notifier clone│
//!     └──────┬───────┘     └──────┬───────┘     └──────┬───────┘
//!            ▼                    ▼                    ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Notifier<T> (subject)                                        │
//! │  - ordered registry of ListenerRef<T> (duplicates allowed)    │
//! │  - publish: validate state, snapshot registry, fan out        │
//! └──────┬──────────────────┬──────────────────┬──────────────────┘
//!        ▼                  ▼                  ▼
//!  FnListener          LogListener         custom Listen impl
//!  (closure adapter)   (stdout, demos)     (metrics, alerts, ...)
//! ```
//!
//! ## Delivery contract
//! - Listeners run **synchronously and in registration order**; `publish`
//!   returns only after the last one did.
//! - Publishing `None` fails with [`NotifyError::InvalidState`] before any
//!   listener runs; every present value is legal, including zero-like ones.
//! - The round iterates a snapshot: registry changes made by a listener
//!   mid-round take effect from the next publish onward.
//! - There is **no isolation** between listeners: a panic in one aborts
//!   delivery to the rest of that round and surfaces at the publish site.
//!
//! ## Features
//! | Area           | Description                                              | Key types / traits          |
//! |----------------|----------------------------------------------------------|-----------------------------|
//! | **Subject**    | Registry + synchronous fan-out.                          | [`Notifier`]                |
//! | **Listeners**  | Capability trait and shared handle type.                 | [`Listen`], [`ListenerRef`] |
//! | **Adapters**   | Subscribe with a closure, or with no callback at all.    | [`FnListener`]              |
//! | **Errors**     | Typed publish-time validation.                           | [`NotifyError`]             |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogListener`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use statecast::{FnListener, ListenerRef, Notifier, NotifyError};
//!
//! fn main() -> Result<(), NotifyError> {
//!     let notifier = Notifier::new();
//!     let results = Arc::new(Mutex::new(Vec::new()));
//!
//!     let sink = Arc::clone(&results);
//!     let doubler: ListenerRef<i32> = FnListener::arc(move |state: &i32| {
//!         sink.lock().unwrap().push(state * 2);
//!     });
//!     notifier.subscribe(Arc::clone(&doubler));
//!
//!     notifier.publish(Some(5))?;
//!     assert_eq!(*results.lock().unwrap(), vec![10]);
//!
//!     // Publishing without a value is a caller bug, caught up front:
//!     assert_eq!(notifier.publish(None), Err(NotifyError::InvalidState));
//!
//!     notifier.unsubscribe(&doubler);
//!     assert!(notifier.is_empty());
//!     Ok(())
//! }
//! ```
mod error;
mod listeners;
mod notify;

// ---- Public re-exports ----

pub use error::NotifyError;
pub use listeners::{FnListener, Listen, ListenerRef};
pub use notify::Notifier;

// Optional: expose a simple built-in stdout listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
