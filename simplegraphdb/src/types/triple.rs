use serde::Deserialize;

use crate::types::{EntityId, PredicateId};

/// A stored triple: three dictionary ids plus an opaque payload.
///
/// The ids are always in their role positions (subject, predicate, object)
/// regardless of which index ordering produced the triple.
///
/// INVARIANT: the same `(subject, predicate, object)` carries the same `value`
/// on every index path of the store it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: EntityId,
    pub predicate: PredicateId,
    pub object: EntityId,
    pub value: String,
}

impl Triple {
    #[must_use]
    pub fn new(
        subject: EntityId,
        predicate: PredicateId,
        object: EntityId,
        value: impl Into<String>,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
            value: value.into(),
        }
    }

    /// The id key of this triple, without the payload.
    #[must_use]
    pub const fn key(&self) -> (EntityId, PredicateId, EntityId) {
        (self.subject, self.predicate, self.object)
    }
}

/// A triple as it appears in a source file, before dictionary encoding.
///
/// Deserializes from `{"subject": S, "prop": P, "object": O}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripleRecord {
    pub subject: String,
    #[serde(rename = "prop")]
    pub predicate: String,
    pub object: String,
}

impl TripleRecord {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}
