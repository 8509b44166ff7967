//! Change-notification registries
//!
//! Rating widgets notify hosts through explicitly-released listener
//! registrations: a subscriber keeps the [`SubscriptionId`] it was handed
//! and releases it when it goes away. Nothing here is weakly referenced,
//! so teardown is deterministic.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::Arc;

new_key_type! {
    /// Stable handle for a registered listener
    pub struct SubscriptionId;
}

/// Listener function type
pub type Listener<T> = Arc<dyn Fn(T) + Send + Sync>;

/// A set of change listeners with explicit registration lifetimes
pub struct ListenerSet<T> {
    listeners: SlotMap<SubscriptionId, Listener<T>>,
}

impl<T> ListenerSet<T> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener and return the handle that releases it
    pub fn subscribe(&mut self, listener: Listener<T>) -> SubscriptionId {
        self.listeners.insert(listener)
    }

    /// Release a registration. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Drop every registration
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: Copy> ListenerSet<T> {
    /// Call every registered listener with `value`.
    ///
    /// Listeners are snapshotted before the calls so a callback that
    /// re-enters the set's owner never observes a half-iterated map.
    pub fn emit(&self, value: T) {
        if self.listeners.is_empty() {
            return;
        }
        tracing::trace!(
            "ListenerSet::emit - notifying {} listeners",
            self.listeners.len()
        );
        let snapshot: SmallVec<[Listener<T>; 4]> =
            self.listeners.values().cloned().collect();
        for listener in snapshot {
            listener(value);
        }
    }
}

impl<T> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn subscribe_and_emit_delivers_value() {
        let mut set: ListenerSet<u32> = ListenerSet::new();
        let seen = Arc::new(AtomicU32::new(0));

        let seen_clone = seen.clone();
        set.subscribe(Arc::new(move |v| {
            seen_clone.store(v, Ordering::SeqCst);
        }));

        set.emit(4);
        assert_eq!(seen.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn every_listener_receives_the_emit() {
        let mut set: ListenerSet<u32> = ListenerSet::new();
        let calls = Arc::new(AtomicU32::new(0));

        for _ in 0..3 {
            let calls_clone = calls.clone();
            set.subscribe(Arc::new(move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            }));
        }

        set.emit(1);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut set: ListenerSet<u32> = ListenerSet::new();
        let calls = Arc::new(AtomicU32::new(0));

        let calls_clone = calls.clone();
        let id = set.subscribe(Arc::new(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(set.unsubscribe(id));
        set.emit(2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // Second release of the same id is a no-op
        assert!(!set.unsubscribe(id));
    }

    #[test]
    fn clear_releases_everything() {
        let mut set: ListenerSet<u32> = ListenerSet::new();
        let calls = Arc::new(AtomicU32::new(0));

        for _ in 0..2 {
            let calls_clone = calls.clone();
            set.subscribe(Arc::new(move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            }));
        }
        assert_eq!(set.len(), 2);

        set.clear();
        assert!(set.is_empty());
        set.emit(5);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn emit_with_no_listeners_is_fine() {
        let set: ListenerSet<u32> = ListenerSet::new();
        set.emit(7);
    }
}
