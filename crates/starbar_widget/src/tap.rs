//! Tap bindings
//!
//! Every slot is wired into the registry before it enters the visible
//! sequence and released before it leaves it, so a tap can only ever
//! resolve through a live slot. Bindings are plain data rather than
//! closures: resolving one never borrows the widget that owns it.

use crate::slot::SlotId;
use rustc_hash::FxHashMap;

/// The value a slot produces when tapped (its index + 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapBinding {
    pub value: u32,
}

/// Live tap bindings for a rating row, keyed by slot id
#[derive(Default)]
pub struct TapRegistry {
    bindings: FxHashMap<SlotId, TapBinding>,
}

impl TapRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire a slot to the value it produces
    pub fn register(&mut self, slot_id: SlotId, binding: TapBinding) {
        self.bindings.insert(slot_id, binding);
    }

    /// Resolve the binding for a slot, if it is still wired
    pub fn resolve(&self, slot_id: SlotId) -> Option<TapBinding> {
        self.bindings.get(&slot_id).copied()
    }

    /// Check whether a slot is wired
    pub fn has_binding(&self, slot_id: SlotId) -> bool {
        self.bindings.contains_key(&slot_id)
    }

    /// Release a slot's binding. Returns false if it was already gone.
    pub fn release(&mut self, slot_id: SlotId) -> bool {
        self.bindings.remove(&slot_id).is_some()
    }

    /// Release every binding
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = TapRegistry::new();
        let slot = SlotId(1);

        registry.register(slot, TapBinding { value: 1 });

        assert!(registry.has_binding(slot));
        assert_eq!(registry.resolve(slot), Some(TapBinding { value: 1 }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_release_stops_resolution() {
        let mut registry = TapRegistry::new();
        let slot = SlotId(3);

        registry.register(slot, TapBinding { value: 3 });
        assert!(registry.release(slot));

        assert!(!registry.has_binding(slot));
        assert_eq!(registry.resolve(slot), None);

        // Releasing again reports nothing to release
        assert!(!registry.release(slot));
    }

    #[test]
    fn test_unknown_slot_resolves_to_nothing() {
        let registry = TapRegistry::new();
        assert_eq!(registry.resolve(SlotId(99)), None);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut registry = TapRegistry::new();
        for i in 1..=4 {
            registry.register(SlotId(i), TapBinding { value: i as u32 });
        }
        assert_eq!(registry.len(), 4);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(SlotId(2)), None);
    }

    #[test]
    fn test_rewiring_replaces_the_binding() {
        let mut registry = TapRegistry::new();
        let slot = SlotId(7);

        registry.register(slot, TapBinding { value: 2 });
        registry.register(slot, TapBinding { value: 5 });

        assert_eq!(registry.resolve(slot), Some(TapBinding { value: 5 }));
        assert_eq!(registry.len(), 1);
    }
}
