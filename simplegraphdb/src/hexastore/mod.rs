//! Sextuple-indexed in-memory triple store.
//!
//! Every triple is reachable through all six orderings of its roles: SPO,
//! SOP, PSO, POS, OSP and OPS. Each ordering is a two-level parent map whose
//! entries point at a leaf holding the third role and the payload.
//!
//! The six logical indices are backed by only three physical leaf families:
//!
//! - `SPO[s][p]` and `PSO[p][s]` share one object-keyed leaf,
//! - `SOP[s][o]` and `OSP[o][s]` share one predicate-keyed leaf,
//! - `POS[p][o]` and `OPS[o][p]` share one subject-keyed leaf.
//!
//! A mutation therefore writes three leaves and the partner ordering of each
//! sees the change through the shared slot (see [`leaf`]).
//!
//! # Invariants
//!
//! - A triple `(s, p, o, v)` is stored iff [`Hexastore::probe`] returns `v` for
//!   every [`IndexOrdering`]. No public method returns with the triple
//!   reachable through only some of the orderings.
//! - Query methods never mutate the store or its dictionaries.
//! - Leaves are never freed; removing the last entry of a leaf leaves it empty.

mod leaf;
mod ordering;

use leaf::{LeafArena, LeafSlot, Parent, alias, ensure_leaf, slot_of};
pub use ordering::IndexOrdering;

use crate::dictionary::Dictionary;
use crate::types::{EntityId, PredicateId, Triple, TripleRecord};

/// Payload attached to triples loaded from files, which carry none.
pub const PLACEHOLDER_VALUE: &str = "xxxx";

/// The hexastore: six orderings over dictionary-encoded triples.
#[derive(Debug, Default)]
pub struct Hexastore {
    spo: Parent<EntityId, PredicateId>,
    pso: Parent<PredicateId, EntityId>,
    sop: Parent<EntityId, EntityId>,
    osp: Parent<EntityId, EntityId>,
    pos: Parent<PredicateId, EntityId>,
    ops: Parent<EntityId, PredicateId>,
    /// Leaves of SPO and PSO, keyed by object.
    object_leaves: LeafArena<EntityId>,
    /// Leaves of SOP and OSP, keyed by predicate.
    predicate_leaves: LeafArena<PredicateId>,
    /// Leaves of POS and OPS, keyed by subject.
    subject_leaves: LeafArena<EntityId>,
    entities: Dictionary<EntityId>,
    properties: Dictionary<PredicateId>,
    triple_count: usize,
}

impl Hexastore {
    /// Create an empty store with empty dictionaries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw records, attaching [`PLACEHOLDER_VALUE`] to each.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TripleRecord>,
    {
        let mut store = Self::new();
        for record in records {
            store.add(
                &record.subject,
                &record.predicate,
                &record.object,
                PLACEHOLDER_VALUE,
            );
        }
        tracing::info!(
            "Loaded {} triples ({} entities, {} predicates)",
            store.len(),
            store.entities.len(),
            store.properties.len()
        );
        store
    }

    /// Add a triple given as terms.
    ///
    /// Unknown terms get fresh identifiers; known terms reuse theirs. Adding
    /// the same `(subject, predicate, object)` again overwrites the payload.
    /// Returns the encoded triple.
    pub fn add(
        &mut self,
        subject: &str,
        predicate: &str,
        object: &str,
        value: impl Into<String>,
    ) -> Triple {
        let triple = Triple::new(
            self.entities.get_or_put(subject),
            self.properties.get_or_put(predicate),
            self.entities.get_or_put(object),
            value,
        );
        self.add_triple(&triple);
        triple
    }

    /// Add an already encoded triple.
    ///
    /// The ids are stored as given; ids the dictionaries never handed out are
    /// indexed but will not resolve back to terms.
    pub fn add_triple(&mut self, triple: &Triple) {
        let (s, p, o) = triple.key();

        let object_leaf = ensure_leaf(&mut self.spo, &mut self.object_leaves, s, p);
        let previous = self
            .object_leaves
            .upsert(object_leaf, o, triple.value.clone());
        alias(&mut self.pso, p, s, object_leaf);

        let predicate_leaf = ensure_leaf(&mut self.sop, &mut self.predicate_leaves, s, o);
        self.predicate_leaves
            .upsert(predicate_leaf, p, triple.value.clone());
        alias(&mut self.osp, o, s, predicate_leaf);

        let subject_leaf = ensure_leaf(&mut self.pos, &mut self.subject_leaves, p, o);
        self.subject_leaves
            .upsert(subject_leaf, s, triple.value.clone());
        alias(&mut self.ops, o, p, subject_leaf);

        if previous.is_none() {
            self.triple_count += 1;
        }
    }

    /// Remove the triple `(subject, predicate, object)`.
    ///
    /// Returns `false` (and changes nothing) if the triple is not stored.
    pub fn remove(&mut self, subject: EntityId, predicate: PredicateId, object: EntityId) -> bool {
        let Some(object_leaf) = slot_of(&self.spo, subject, predicate) else {
            return false;
        };
        if self.object_leaves.remove(object_leaf, &object).is_none() {
            return false;
        }
        if let Some(slot) = slot_of(&self.sop, subject, object) {
            self.predicate_leaves.remove(slot, &predicate);
        }
        if let Some(slot) = slot_of(&self.pos, predicate, object) {
            self.subject_leaves.remove(slot, &subject);
        }
        self.triple_count -= 1;
        tracing::debug!("Removed triple ({subject}, {predicate}, {object})");
        true
    }

    /// Remove a triple given as terms.
    ///
    /// Unknown terms mean the triple cannot be stored, so this is a no-op
    /// returning `false`; the dictionaries are never touched.
    pub fn remove_terms(&mut self, subject: &str, predicate: &str, object: &str) -> bool {
        match (
            self.entity_id(subject),
            self.predicate_id(predicate),
            self.entity_id(object),
        ) {
            (Some(s), Some(p), Some(o)) => self.remove(s, p, o),
            _ => false,
        }
    }

    /// Fully bound pattern: existence check, zero or one result.
    #[must_use]
    pub fn query_spo(
        &self,
        subject: EntityId,
        predicate: PredicateId,
        object: EntityId,
    ) -> Vec<Triple> {
        slot_of(&self.spo, subject, predicate)
            .and_then(|slot| self.object_leaves.value(slot, &object))
            .map(|value| Triple::new(subject, predicate, object, value))
            .into_iter()
            .collect()
    }

    /// Subject and predicate bound: iterate the object leaf under `SPO[s][p]`.
    #[must_use]
    pub fn query_spx(&self, subject: EntityId, predicate: PredicateId) -> Vec<Triple> {
        slot_of(&self.spo, subject, predicate)
            .and_then(|slot| self.object_leaves.get(slot))
            .map(|leaf| {
                leaf.iter()
                    .map(|(&object, value)| Triple::new(subject, predicate, object, value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Subject and object bound: iterate the predicate leaf under `SOP[s][o]`.
    #[must_use]
    pub fn query_sxo(&self, subject: EntityId, object: EntityId) -> Vec<Triple> {
        slot_of(&self.sop, subject, object)
            .and_then(|slot| self.predicate_leaves.get(slot))
            .map(|leaf| {
                leaf.iter()
                    .map(|(&predicate, value)| {
                        Triple::new(subject, predicate, object, value.as_str())
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Subject bound: every predicate/object pair under `SPO[s]`.
    #[must_use]
    pub fn query_sxx(&self, subject: EntityId) -> Vec<Triple> {
        let mut results = Vec::new();
        let Some(by_predicate) = self.spo.get(&subject) else {
            return results;
        };
        for (&predicate, &slot) in by_predicate {
            if let Some(leaf) = self.object_leaves.get(slot) {
                for (&object, value) in leaf {
                    results.push(Triple::new(subject, predicate, object, value.as_str()));
                }
            }
        }
        results
    }

    /// Predicate and object bound: iterate the subject leaf under `POS[p][o]`.
    #[must_use]
    pub fn query_xpo(&self, predicate: PredicateId, object: EntityId) -> Vec<Triple> {
        slot_of(&self.pos, predicate, object)
            .and_then(|slot| self.subject_leaves.get(slot))
            .map(|leaf| {
                leaf.iter()
                    .map(|(&subject, value)| {
                        Triple::new(subject, predicate, object, value.as_str())
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Predicate bound: every subject/object pair under `PSO[p]`.
    #[must_use]
    pub fn query_xpx(&self, predicate: PredicateId) -> Vec<Triple> {
        let mut results = Vec::new();
        let Some(by_subject) = self.pso.get(&predicate) else {
            return results;
        };
        for (&subject, &slot) in by_subject {
            if let Some(leaf) = self.object_leaves.get(slot) {
                for (&object, value) in leaf {
                    results.push(Triple::new(subject, predicate, object, value.as_str()));
                }
            }
        }
        results
    }

    /// Object bound: every predicate/subject pair under `OPS[o]`.
    #[must_use]
    pub fn query_xxo(&self, object: EntityId) -> Vec<Triple> {
        let mut results = Vec::new();
        let Some(by_predicate) = self.ops.get(&object) else {
            return results;
        };
        for (&predicate, &slot) in by_predicate {
            if let Some(leaf) = self.subject_leaves.get(slot) {
                for (&subject, value) in leaf {
                    results.push(Triple::new(subject, predicate, object, value.as_str()));
                }
            }
        }
        results
    }

    /// Nothing bound: every stored triple, by full traversal of SPO.
    #[must_use]
    pub fn query_xxx(&self) -> Vec<Triple> {
        let mut results = Vec::with_capacity(self.triple_count);
        for &subject in self.spo.keys() {
            results.extend(self.query_sxx(subject));
        }
        results
    }

    /// Walk one ordering's path for `(subject, predicate, object)` and return
    /// the payload found at its end.
    #[must_use]
    pub fn probe(
        &self,
        ordering: IndexOrdering,
        subject: EntityId,
        predicate: PredicateId,
        object: EntityId,
    ) -> Option<&str> {
        let slot = self.leaf_slot(ordering, subject, predicate, object)?;
        match ordering {
            IndexOrdering::Spo | IndexOrdering::Pso => self.object_leaves.value(slot, &object),
            IndexOrdering::Sop | IndexOrdering::Osp => {
                self.predicate_leaves.value(slot, &predicate)
            }
            IndexOrdering::Pos | IndexOrdering::Ops => self.subject_leaves.value(slot, &subject),
        }
    }

    /// Whether every ordering references the same physical leaf as its
    /// [partner](IndexOrdering::partner) for the key paths of
    /// `(subject, predicate, object)`.
    ///
    /// Returns `false` if any of the six parent entries is missing.
    #[must_use]
    pub fn shares_leaves(
        &self,
        subject: EntityId,
        predicate: PredicateId,
        object: EntityId,
    ) -> bool {
        IndexOrdering::ALL.into_iter().all(|ordering| {
            let slot = self.leaf_slot(ordering, subject, predicate, object);
            slot.is_some()
                && slot == self.leaf_slot(ordering.partner(), subject, predicate, object)
        })
    }

    /// Arena slot the parent levels of `ordering` lead to.
    fn leaf_slot(
        &self,
        ordering: IndexOrdering,
        subject: EntityId,
        predicate: PredicateId,
        object: EntityId,
    ) -> Option<LeafSlot> {
        match ordering {
            IndexOrdering::Spo => slot_of(&self.spo, subject, predicate),
            IndexOrdering::Pso => slot_of(&self.pso, predicate, subject),
            IndexOrdering::Sop => slot_of(&self.sop, subject, object),
            IndexOrdering::Osp => slot_of(&self.osp, object, subject),
            IndexOrdering::Pos => slot_of(&self.pos, predicate, object),
            IndexOrdering::Ops => slot_of(&self.ops, object, predicate),
        }
    }

    /// Reverse lookup in the entity dictionary.
    #[must_use]
    pub fn resolve_entity(&self, id: EntityId) -> Option<&str> {
        self.entities.get(id)
    }

    /// Reverse lookup in the predicate dictionary.
    #[must_use]
    pub fn resolve_property(&self, id: PredicateId) -> Option<&str> {
        self.properties.get(id)
    }

    /// Identifier of a known entity term, without allocating.
    #[must_use]
    pub fn entity_id(&self, term: &str) -> Option<EntityId> {
        self.entities.get_key(term)
    }

    /// Identifier of a known predicate term, without allocating.
    #[must_use]
    pub fn predicate_id(&self, term: &str) -> Option<PredicateId> {
        self.properties.get_key(term)
    }

    #[must_use]
    pub const fn entities(&self) -> &Dictionary<EntityId> {
        &self.entities
    }

    #[must_use]
    pub const fn properties(&self) -> &Dictionary<PredicateId> {
        &self.properties
    }

    /// Render a triple as `subject -> predicate -> object`.
    ///
    /// Unknown ids render as empty strings.
    #[must_use]
    pub fn present_triple(&self, triple: &Triple) -> String {
        format!(
            "{} -> {} -> {}",
            self.resolve_entity(triple.subject).unwrap_or_default(),
            self.resolve_property(triple.predicate).unwrap_or_default(),
            self.resolve_entity(triple.object).unwrap_or_default()
        )
    }

    /// Number of stored triples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.triple_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.triple_count == 0
    }

    /// Number of distinct subjects with at least one parent entry in SPO.
    ///
    /// Subjects whose triples were all removed still count, since leaves are
    /// never freed.
    #[must_use]
    pub fn indexed_subjects(&self) -> usize {
        self.spo.len()
    }

    /// Leaf count per physical family: (object, predicate, subject).
    #[must_use]
    pub fn leaf_counts(&self) -> (usize, usize, usize) {
        (
            self.object_leaves.len(),
            self.predicate_leaves.len(),
            self.subject_leaves.len(),
        )
    }
}

/// Group triples by key, for order-independent comparison in tests.
#[cfg(test)]
pub(crate) fn by_key(
    triples: Vec<Triple>,
) -> std::collections::HashMap<(EntityId, PredicateId, EntityId), String> {
    triples
        .into_iter()
        .map(|triple| (triple.key(), triple.value))
        .collect()
}
