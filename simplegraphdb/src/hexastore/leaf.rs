//! Leaf storage for the hexastore.
//!
//! The innermost level of every index ordering is a leaf mapping the third
//! role's id to the triple payload. Leaves live in an arena and the two-level
//! parent maps only hold [`LeafSlot`]s, which lets two orderings point at the
//! same physical leaf: a write through one ordering is visible through its
//! partner without a second write.
//!
//! # Invariants
//!
//! - A slot, once allocated, stays valid for the lifetime of the arena.
//! - Two parent entries referencing the same slot see the same entries.

use std::collections::HashMap;
use std::hash::Hash;

/// Position of a leaf inside a [`LeafArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeafSlot(usize);

/// A leaf: third-role id to payload.
pub type Leaf<K> = HashMap<K, String>;

/// Two-level parent index: first role -> second role -> leaf slot.
pub type Parent<A, B> = HashMap<A, HashMap<B, LeafSlot>>;

/// Owner of every leaf of one physical family.
#[derive(Debug)]
pub struct LeafArena<K> {
    leaves: Vec<Leaf<K>>,
}

impl<K> Default for LeafArena<K> {
    fn default() -> Self {
        Self { leaves: Vec::new() }
    }
}

impl<K: Eq + Hash> LeafArena<K> {
    /// Allocate a fresh, empty leaf.
    pub fn alloc(&mut self) -> LeafSlot {
        self.leaves.push(HashMap::new());
        LeafSlot(self.leaves.len() - 1)
    }

    #[must_use]
    pub fn get(&self, slot: LeafSlot) -> Option<&Leaf<K>> {
        self.leaves.get(slot.0)
    }

    /// Insert or overwrite `key` in the leaf at `slot`.
    ///
    /// Returns the previous payload, if any.
    pub fn upsert(&mut self, slot: LeafSlot, key: K, value: String) -> Option<String> {
        self.leaves
            .get_mut(slot.0)
            .and_then(|leaf| leaf.insert(key, value))
    }

    /// Remove `key` from the leaf at `slot`, returning its payload.
    pub fn remove(&mut self, slot: LeafSlot, key: &K) -> Option<String> {
        self.leaves.get_mut(slot.0).and_then(|leaf| leaf.remove(key))
    }

    /// Payload stored under `key` in the leaf at `slot`.
    #[must_use]
    pub fn value(&self, slot: LeafSlot, key: &K) -> Option<&str> {
        self.get(slot)?.get(key).map(String::as_str)
    }

    /// Number of allocated leaves, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }
}

/// Slot referenced by `parent[a][b]`, if any.
pub fn slot_of<A, B>(parent: &Parent<A, B>, a: A, b: B) -> Option<LeafSlot>
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    parent.get(&a)?.get(&b).copied()
}

/// Slot referenced by `parent[a][b]`, allocating a new leaf in `arena` the
/// first time the key pair is seen.
pub fn ensure_leaf<A, B, K>(
    parent: &mut Parent<A, B>,
    arena: &mut LeafArena<K>,
    a: A,
    b: B,
) -> LeafSlot
where
    A: Eq + Hash,
    B: Eq + Hash,
    K: Eq + Hash,
{
    *parent
        .entry(a)
        .or_default()
        .entry(b)
        .or_insert_with(|| arena.alloc())
}

/// Make `parent[a][b]` reference `slot` unless it already references a leaf.
///
/// Only the first call per key pair writes; later calls find the shared slot
/// already in place.
pub fn alias<A, B>(parent: &mut Parent<A, B>, a: A, b: B, slot: LeafSlot)
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    let existing = *parent.entry(a).or_default().entry(b).or_insert(slot);
    debug_assert_eq!(existing, slot, "paired index references a different leaf");
}
