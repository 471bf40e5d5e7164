//! # Synchronous state fan-out to registered listeners.
//!
//! [`Notifier`] owns the listener registry and drives notification: each
//! [`publish`](Notifier::publish) call invokes every registered listener, in
//! registration order, on the caller's own thread.
//!
//! ## Architecture
//! ```text
//! publish(Some(state))
//!     │  (snapshot of the registry, taken up front)
//!     ├──► listener 1 ── on_state(&state)
//!     ├──► listener 2 ── on_state(&state)
//!     └──► listener N ── on_state(&state)
//! ```
//!
//! ## Rules
//! - **Registration order**: listeners run in the order they subscribed.
//! - **Duplicates allowed**: subscribing one handle twice means two calls per
//!   publish; `unsubscribe` removes every occurrence of the handle.
//! - **Snapshot delivery**: a listener that subscribes/unsubscribes others
//!   during its own `on_state` call never changes the in-flight round; the
//!   change shows up from the next publish onward.
//! - **No isolation**: a panicking listener aborts delivery to the listeners
//!   remaining in that round; the panic surfaces at the publish call site.
//! - **Fire-and-forget**: `Ok(())` reports validation only, never delivery.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::NotifyError;
use crate::listeners::ListenerRef;

/// Subject side of the notification pattern.
///
/// Holds an ordered registry of [`ListenerRef`](crate::ListenerRef) handles
/// and fans published state out to them synchronously.
///
/// ### Properties
/// - **Synchronous**: `publish` returns only after the last listener ran.
/// - **Non-owning**: the registry shares listeners; callers keep their own
///   handle and remain responsible for unsubscribing.
/// - **Cloneable**: cheap to clone; clones share one registry, so a listener
///   holding a clone can re-enter `subscribe`/`unsubscribe` mid-round.
pub struct Notifier<T> {
    listeners: Arc<RwLock<Vec<ListenerRef<T>>>>,
}

impl<T> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T: 'static> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Notifier<T> {
    /// Creates a notifier with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a notifier pre-populated with the given listeners.
    ///
    /// Order is preserved: the first element of `listeners` is notified first.
    #[must_use]
    pub fn with_listeners(listeners: Vec<ListenerRef<T>>) -> Self {
        Self {
            listeners: Arc::new(RwLock::new(listeners)),
        }
    }

    /// Appends a listener to the end of the registry.
    ///
    /// No uniqueness check is performed: subscribing the same handle twice
    /// results in two invocations per publish.
    pub fn subscribe(&self, listener: ListenerRef<T>) {
        self.registry_mut().push(listener);
    }

    /// Removes **every** registry entry that is the same handle as `listener`.
    ///
    /// Matching is by pointer identity ([`Arc::ptr_eq`]), so only clones of
    /// the originally subscribed `Arc` are removed. Unsubscribing a handle
    /// that was never registered is a no-op.
    pub fn unsubscribe(&self, listener: &ListenerRef<T>) {
        self.registry_mut().retain(|l| !Arc::ptr_eq(l, listener));
    }

    /// Publishes a state value to all registered listeners.
    ///
    /// Fails with [`NotifyError::InvalidState`] when `state` is `None`,
    /// before any listener is invoked. Otherwise takes a snapshot of the
    /// registry and calls each listener's
    /// [`on_state`](crate::Listen::on_state) with a borrow of the value, in
    /// registration order, on the calling thread.
    ///
    /// Publishing with zero registered listeners is legal and performs no
    /// invocations.
    ///
    /// # Errors
    /// Returns [`NotifyError::InvalidState`] if no state value was supplied.
    pub fn publish(&self, state: Option<T>) -> Result<(), NotifyError> {
        self.publish_ref(state.as_ref())
    }

    /// Publishes a borrowed state value.
    ///
    /// Shorthand for callers that keep ownership of the value; semantics are
    /// identical to [`publish`](Notifier::publish).
    ///
    /// # Errors
    /// Returns [`NotifyError::InvalidState`] if no state value was supplied.
    pub fn publish_ref(&self, state: Option<&T>) -> Result<(), NotifyError> {
        let state = state.ok_or(NotifyError::InvalidState)?;

        // Snapshot first, then fan out with the lock released, so listeners
        // may mutate the registry without touching the in-flight round.
        let snapshot: Vec<ListenerRef<T>> = self.registry().clone();
        for listener in &snapshot {
            listener.on_state(state);
        }
        Ok(())
    }

    /// Number of registered listeners (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry().len()
    }

    /// True if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    // The lock is never held while listener code runs.
    fn registry(&self) -> RwLockReadGuard<'_, Vec<ListenerRef<T>>> {
        self.listeners.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, Vec<ListenerRef<T>>> {
        self.listeners.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::FnListener;
    use std::sync::Mutex;

    type Probe<T> = Arc<Mutex<Vec<T>>>;

    fn recording_listener<T: Copy + Send + 'static>(probe: &Probe<T>) -> ListenerRef<T> {
        let sink = Arc::clone(probe);
        FnListener::arc(move |state: &T| sink.lock().unwrap().push(*state))
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let results: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let notifier = Notifier::new();

        let doubled = Arc::clone(&results);
        notifier.subscribe(FnListener::arc(move |state: &i32| {
            doubled.lock().unwrap().push(state * 2)
        }));
        let bumped = Arc::clone(&results);
        notifier.subscribe(FnListener::arc(move |state: &i32| {
            bumped.lock().unwrap().push(state + 1)
        }));

        notifier.publish(Some(5)).unwrap();
        assert_eq!(*results.lock().unwrap(), vec![10, 6]);
    }

    #[test]
    fn test_publish_without_state_is_rejected() {
        let notifier: Notifier<i32> = Notifier::new();
        assert_eq!(notifier.publish(None), Err(NotifyError::InvalidState));
    }

    #[test]
    fn test_publish_without_state_never_reaches_listeners() {
        let probe: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let notifier = Notifier::new();
        notifier.subscribe(recording_listener(&probe));

        assert_eq!(notifier.publish(None), Err(NotifyError::InvalidState));
        assert!(probe.lock().unwrap().is_empty());
    }

    #[test]
    fn test_publish_with_no_listeners_is_legal() {
        let notifier: Notifier<i32> = Notifier::new();
        assert!(notifier.publish(Some(5)).is_ok());
    }

    #[test]
    fn test_present_but_zero_like_values_are_accepted() {
        let ints: Notifier<i32> = Notifier::new();
        assert!(ints.publish(Some(0)).is_ok());

        let strings: Notifier<String> = Notifier::new();
        assert!(strings.publish(Some(String::new())).is_ok());

        let flags: Notifier<bool> = Notifier::new();
        assert!(flags.publish(Some(false)).is_ok());
    }

    #[test]
    fn test_unsubscribe_unknown_listener_is_noop() {
        let probe: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let notifier = Notifier::new();
        notifier.subscribe(recording_listener(&probe));

        let stranger = recording_listener(&probe);
        notifier.unsubscribe(&stranger);

        notifier.publish(Some(1)).unwrap();
        assert_eq!(*probe.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_double_subscribe_delivers_twice() {
        let probe: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let notifier = Notifier::new();

        let listener = recording_listener(&probe);
        notifier.subscribe(Arc::clone(&listener));
        notifier.subscribe(Arc::clone(&listener));

        notifier.publish(Some(3)).unwrap();
        assert_eq!(*probe.lock().unwrap(), vec![3, 3]);
    }

    #[test]
    fn test_unsubscribe_removes_every_occurrence() {
        let probe: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let notifier = Notifier::new();

        let listener = recording_listener(&probe);
        notifier.subscribe(Arc::clone(&listener));
        notifier.subscribe(Arc::clone(&listener));
        assert_eq!(notifier.len(), 2);

        notifier.unsubscribe(&listener);
        assert!(notifier.is_empty());

        notifier.publish(Some(3)).unwrap();
        assert!(probe.lock().unwrap().is_empty());
    }

    #[test]
    fn test_silent_adapter_survives_publish() {
        let notifier: Notifier<i32> = Notifier::new();
        notifier.subscribe(Arc::new(FnListener::silent()));
        assert!(notifier.publish(Some(9)).is_ok());
    }

    #[test]
    fn test_publish_ref_borrows_state() {
        let probe: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let notifier = Notifier::new();
        notifier.subscribe(recording_listener(&probe));

        let state = 11;
        notifier.publish_ref(Some(&state)).unwrap();
        notifier.publish_ref(Some(&state)).unwrap();
        assert_eq!(*probe.lock().unwrap(), vec![11, 11]);
    }

    #[test]
    fn test_mid_round_subscribe_misses_current_round() {
        let probe: Probe<u8> = Arc::new(Mutex::new(Vec::new()));
        let notifier: Notifier<u8> = Notifier::new();

        let late = recording_listener(&probe);
        let handle = notifier.clone();
        let registered = Arc::new(Mutex::new(false));
        let once = Arc::clone(&registered);
        notifier.subscribe(FnListener::arc(move |_state: &u8| {
            let mut done = once.lock().unwrap();
            if !*done {
                handle.subscribe(Arc::clone(&late));
                *done = true;
            }
        }));

        // Round 1: `late` is added mid-round and must not see this state.
        notifier.publish(Some(1)).unwrap();
        assert!(probe.lock().unwrap().is_empty());

        // Round 2: `late` is part of the registry now.
        notifier.publish(Some(2)).unwrap();
        assert_eq!(*probe.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_clones_share_one_registry() {
        let probe: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let notifier = Notifier::new();
        let clone = notifier.clone();

        clone.subscribe(recording_listener(&probe));
        assert_eq!(notifier.len(), 1);

        notifier.publish(Some(4)).unwrap();
        assert_eq!(*probe.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_with_listeners_preserves_order() {
        let probe: Probe<i32> = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&probe);
        let second = Arc::clone(&probe);
        let listeners: Vec<ListenerRef<i32>> = vec![
            FnListener::arc(move |state: &i32| first.lock().unwrap().push(*state)),
            FnListener::arc(move |state: &i32| second.lock().unwrap().push(state + 100)),
        ];
        let notifier = Notifier::with_listeners(listeners);

        notifier.publish(Some(1)).unwrap();
        assert_eq!(*probe.lock().unwrap(), vec![1, 101]);
    }
}
