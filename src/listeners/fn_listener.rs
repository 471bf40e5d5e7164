//! # Function-backed listener (`FnListener`)
//!
//! [`FnListener`] adapts a plain closure into a [`Listen`] implementation, so
//! callers can subscribe without defining a named type.
//!
//! The callback is **optional**: an adapter built with [`FnListener::silent`]
//! carries no callback and ignores every delivery. That is a legal "do
//! nothing" listener, not an error.
//!
//! ## Example
//! ```rust
//! use statecast::{FnListener, Listen, ListenerRef};
//!
//! let double: ListenerRef<i32> = FnListener::arc(|state: &i32| {
//!     println!("doubled: {}", state * 2);
//! });
//! double.on_state(&21);
//!
//! let quiet: ListenerRef<i32> = std::sync::Arc::new(FnListener::silent());
//! quiet.on_state(&21); // no-op
//! ```

use std::sync::Arc;

use crate::listeners::listen::Listen;

/// Callback adapter: forwards each published state to a closure.
///
/// Wraps an optional `Fn(&T)`; stateless otherwise.
#[derive(Debug)]
pub struct FnListener<F> {
    f: Option<F>,
}

impl<F> FnListener<F> {
    /// Creates an adapter around the given callback.
    ///
    /// Prefer [`FnListener::arc`] when you immediately need a
    /// [`ListenerRef`](crate::ListenerRef).
    pub fn new(f: F) -> Self {
        Self { f: Some(f) }
    }

    /// Creates the adapter and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use statecast::{FnListener, ListenerRef};
    ///
    /// let l: ListenerRef<u32> = FnListener::arc(|state: &u32| {
    ///     let _ = state;
    /// });
    /// assert_eq!(std::sync::Arc::strong_count(&l), 1);
    /// ```
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<T> FnListener<fn(&T)> {
    /// Creates an adapter with no callback.
    ///
    /// Deliveries to a silent adapter are no-ops.
    #[must_use]
    pub fn silent() -> Self {
        Self { f: None }
    }
}

impl<T, F> Listen<T> for FnListener<F>
where
    T: 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    fn on_state(&self, state: &T) {
        if let Some(f) = &self.f {
            f(state);
        }
    }
}
