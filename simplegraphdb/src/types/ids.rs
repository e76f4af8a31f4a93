//! ID types for entities and predicates.
//!
//! This module provides newtype wrappers for the dense integer identifiers
//! handed out by the dictionaries. Entities (subjects and objects) and
//! predicates live in independent id spaces, so the same surface string used
//! in both roles gets two unrelated ids. Keeping them as distinct types makes
//! mixing the two spaces a compile error.

use std::fmt;
use std::hash::Hash;

/// Common behaviour of the dictionary-assigned identifiers.
///
/// # Invariants
///
/// - `from_index(i).index() == i` for every index handed out by a dictionary.
pub trait TermId: Copy + Eq + Hash + fmt::Debug {
    /// Build an identifier from its position in the dictionary.
    fn from_index(index: u32) -> Self;

    /// The position of this identifier in the dictionary.
    fn index(self) -> u32;
}

/// Identifier of an entity (a subject or an object).
///
/// # Invariants
///
/// - Assigned densely from 0 by the entity dictionary, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(pub u32);

impl TermId for EntityId {
    fn from_index(index: u32) -> Self {
        Self(index)
    }

    fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Identifier of a predicate.
///
/// # Invariants
///
/// - Assigned densely from 0 by the predicate dictionary, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PredicateId(pub u32);

impl TermId for PredicateId {
    fn from_index(index: u32) -> Self {
        Self(index)
    }

    fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl From<u32> for PredicateId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<PredicateId> for u32 {
    fn from(id: PredicateId) -> Self {
        id.0
    }
}
