//! Content model registry mapping child tags to slots.

use std::collections::{HashMap, HashSet};

use super::types::{ChildKind, MinimumRule, Occurs, SlotSpec};

/// Registry describing which children a container accepts.
///
/// Tags are registered in canonical order: every registration opens a new
/// slot unless it is registered [`interleaved`](Self::register_interleaved)
/// with the previous one, in which case both kinds share a slot and keep
/// their relative document order.
#[derive(Debug, Clone)]
pub struct ContentModel {
    container: &'static str,
    slots: HashMap<&'static str, SlotSpec>,
    slot_count: usize,
    minimums: Vec<MinimumRule>,
}

impl ContentModel {
    /// Create an empty model for `container`.
    #[must_use]
    pub fn new(container: &'static str) -> Self {
        Self {
            container,
            slots: HashMap::new(),
            slot_count: 0,
            minimums: Vec::new(),
        }
    }

    /// Register a child kind in the next canonical slot.
    pub fn register(&mut self, kind: ChildKind, occurs: Occurs) -> &mut Self {
        self.slot_count += 1;
        self.insert(kind, occurs)
    }

    /// Register a child kind in the same slot as the previous registration.
    pub fn register_interleaved(&mut self, kind: ChildKind, occurs: Occurs) -> &mut Self {
        if self.slot_count == 0 {
            self.slot_count = 1;
        }
        self.insert(kind, occurs)
    }

    fn insert(&mut self, kind: ChildKind, occurs: Occurs) -> &mut Self {
        let slot = self.slot_count - 1;
        self.slots.insert(kind.tag(), SlotSpec { kind, occurs, slot });
        self
    }

    /// Require at least one child of any of `kinds`.
    pub fn require(&mut self, kinds: &[ChildKind], message: impl Into<String>) -> &mut Self {
        self.minimums.push(MinimumRule {
            kinds: kinds.to_vec(),
            message: message.into(),
        });
        self
    }

    /// Container tag this model belongs to.
    #[must_use]
    pub fn container(&self) -> &'static str {
        self.container
    }

    /// Slot registered for a local tag name.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&SlotSpec> {
        self.slots.get(tag)
    }

    /// Number of canonical slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Minimum rules, in the order they are checked.
    #[must_use]
    pub fn minimums(&self) -> &[MinimumRule] {
        &self.minimums
    }

    /// Return set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.slots.keys().copied().collect()
    }
}
