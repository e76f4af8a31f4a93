//! Pattern classification and index selection.
//!
//! A triple pattern has eight possible shapes depending on which of its three
//! slots are bound. Each shape maps to exactly one hexastore query, so planning
//! is a direct lookup: classify, resolve the literal slots to identifiers, and
//! pick the matching access path.
//!
//! Literals are resolved with the read-only dictionary lookups. A literal the
//! store has never seen cannot match anything, so the plan becomes
//! [`QueryPlan::Empty`] instead of an error.

use std::fmt;

use super::types::{Slot, TriplePattern};
use crate::hexastore::Hexastore;
use crate::types::{EntityId, PredicateId, Triple};

/// Which slots of a pattern are bound. `X` marks a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternShape {
    Spo,
    Spx,
    Sxo,
    Sxx,
    Xpo,
    Xpx,
    Xxo,
    Xxx,
}

impl PatternShape {
    /// Classify by testing each slot for "is a variable" in subject,
    /// predicate, object order.
    #[must_use]
    pub const fn classify(pattern: &TriplePattern) -> Self {
        match (
            pattern.subject.is_variable(),
            pattern.predicate.is_variable(),
            pattern.object.is_variable(),
        ) {
            (false, false, false) => Self::Spo,
            (false, false, true) => Self::Spx,
            (false, true, false) => Self::Sxo,
            (false, true, true) => Self::Sxx,
            (true, false, false) => Self::Xpo,
            (true, false, true) => Self::Xpx,
            (true, true, false) => Self::Xxo,
            (true, true, true) => Self::Xxx,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spo => "SPO",
            Self::Spx => "SPX",
            Self::Sxo => "SXO",
            Self::Sxx => "SXX",
            Self::Xpo => "XPO",
            Self::Xpx => "XPX",
            Self::Xxo => "XXO",
            Self::Xxx => "XXX",
        }
    }
}

impl fmt::Display for PatternShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved access path into the hexastore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    Spo(EntityId, PredicateId, EntityId),
    Spx(EntityId, PredicateId),
    Sxo(EntityId, EntityId),
    Sxx(EntityId),
    Xpo(PredicateId, EntityId),
    Xpx(PredicateId),
    Xxo(EntityId),
    Xxx,
    /// A literal slot names a term the store does not know.
    Empty {
        shape: PatternShape,
        unresolved: String,
    },
}

type Resolved = (Option<EntityId>, Option<PredicateId>, Option<EntityId>);

impl QueryPlan {
    /// Plan `pattern` against `store`. Never mutates the store.
    #[must_use]
    pub fn build(pattern: &TriplePattern, store: &Hexastore) -> Self {
        let shape = PatternShape::classify(pattern);
        let (subject, predicate, object) = match resolve(pattern, store) {
            Ok(ids) => ids,
            Err(unresolved) => return Self::Empty { shape, unresolved },
        };

        match (subject, predicate, object) {
            (Some(s), Some(p), Some(o)) => Self::Spo(s, p, o),
            (Some(s), Some(p), None) => Self::Spx(s, p),
            (Some(s), None, Some(o)) => Self::Sxo(s, o),
            (Some(s), None, None) => Self::Sxx(s),
            (None, Some(p), Some(o)) => Self::Xpo(p, o),
            (None, Some(p), None) => Self::Xpx(p),
            (None, None, Some(o)) => Self::Xxo(o),
            (None, None, None) => Self::Xxx,
        }
    }

    #[must_use]
    pub const fn shape(&self) -> PatternShape {
        match self {
            Self::Spo(..) => PatternShape::Spo,
            Self::Spx(..) => PatternShape::Spx,
            Self::Sxo(..) => PatternShape::Sxo,
            Self::Sxx(..) => PatternShape::Sxx,
            Self::Xpo(..) => PatternShape::Xpo,
            Self::Xpx(..) => PatternShape::Xpx,
            Self::Xxo(..) => PatternShape::Xxo,
            Self::Xxx => PatternShape::Xxx,
            Self::Empty { shape, .. } => *shape,
        }
    }

    /// Run the plan. Results keep their original role positions.
    #[must_use]
    pub fn execute(&self, store: &Hexastore) -> Vec<Triple> {
        match *self {
            Self::Spo(s, p, o) => store.query_spo(s, p, o),
            Self::Spx(s, p) => store.query_spx(s, p),
            Self::Sxo(s, o) => store.query_sxo(s, o),
            Self::Sxx(s) => store.query_sxx(s),
            Self::Xpo(p, o) => store.query_xpo(p, o),
            Self::Xpx(p) => store.query_xpx(p),
            Self::Xxo(o) => store.query_xxo(o),
            Self::Xxx => store.query_xxx(),
            Self::Empty { .. } => Vec::new(),
        }
    }
}

/// Resolve literal slots to ids; variables resolve to `None`.
///
/// Returns the first unknown literal as the error.
fn resolve(pattern: &TriplePattern, store: &Hexastore) -> Result<Resolved, String> {
    let entity = |slot: &Slot| -> Result<Option<EntityId>, String> {
        slot.as_literal().map_or(Ok(None), |term| {
            store.entity_id(term).map(Some).ok_or_else(|| term.to_owned())
        })
    };

    let subject = entity(&pattern.subject)?;
    let predicate = match pattern.predicate.as_literal() {
        Some(term) => Some(store.predicate_id(term).ok_or_else(|| term.to_owned())?),
        None => None,
    };
    let object = entity(&pattern.object)?;

    Ok((subject, predicate, object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexastore::by_key;
    use crate::testing::fruit_store;

    fn pattern(s: &str, p: &str, o: &str) -> TriplePattern {
        let slot = |text: &str| {
            text.strip_prefix('?')
                .map_or_else(|| Slot::literal(text), Slot::var)
        };
        TriplePattern::new(slot(s), slot(p), slot(o))
    }

    #[test]
    fn test_classify_all_shapes() {
        let cases = [
            (pattern("a", "b", "c"), PatternShape::Spo),
            (pattern("a", "b", "?o"), PatternShape::Spx),
            (pattern("a", "?p", "c"), PatternShape::Sxo),
            (pattern("a", "?p", "?o"), PatternShape::Sxx),
            (pattern("?s", "b", "c"), PatternShape::Xpo),
            (pattern("?s", "b", "?o"), PatternShape::Xpx),
            (pattern("?s", "?p", "c"), PatternShape::Xxo),
            (pattern("?s", "?p", "?o"), PatternShape::Xxx),
        ];
        for (pattern, expected) in cases {
            assert_eq!(PatternShape::classify(&pattern), expected, "{pattern}");
        }
    }

    #[test]
    fn test_build_resolves_literals() {
        let store = fruit_store();
        let apple = store.entity_id("Apple").unwrap();
        let likes = store.predicate_id("Likes").unwrap();

        assert_eq!(
            QueryPlan::build(&pattern("Apple", "Likes", "?o"), &store),
            QueryPlan::Spx(apple, likes)
        );
        assert_eq!(
            QueryPlan::build(&pattern("?s", "?p", "?o"), &store),
            QueryPlan::Xxx
        );
    }

    #[test]
    fn test_unknown_literal_plans_empty() {
        let store = fruit_store();
        let plan = QueryPlan::build(&pattern("?s", "Hates", "Cow"), &store);

        assert_eq!(
            plan,
            QueryPlan::Empty {
                shape: PatternShape::Xpo,
                unresolved: "Hates".to_owned(),
            }
        );
        assert_eq!(plan.shape(), PatternShape::Xpo);
        assert!(plan.execute(&store).is_empty());
    }

    #[test]
    fn test_entity_literal_in_predicate_slot_is_unknown() {
        // Entity and predicate terms live in separate dictionaries.
        let store = fruit_store();
        let plan = QueryPlan::build(&pattern("?s", "Cow", "?o"), &store);
        assert!(matches!(plan, QueryPlan::Empty { .. }));
    }

    #[test]
    fn test_planning_does_not_grow_dictionaries() {
        let store = fruit_store();
        let entities = store.entities().len();
        let properties = store.properties().len();

        let _ = QueryPlan::build(&pattern("Pear", "Hates", "?o"), &store);

        assert_eq!(store.entities().len(), entities);
        assert_eq!(store.properties().len(), properties);
    }

    #[test]
    fn test_sxo_returns_every_predicate_between_pair() {
        let store = fruit_store();
        let plan = QueryPlan::build(&pattern("Cow", "?p", "Apple"), &store);
        assert_eq!(plan.shape(), PatternShape::Sxo);

        let results = plan.execute(&store);
        assert_eq!(results.len(), 1);
        assert_eq!(store.present_triple(&results[0]), "Cow -> Likes -> Apple");
    }

    #[test]
    fn test_execute_matches_store_query() {
        let store = fruit_store();
        let likes = store.predicate_id("Likes").unwrap();
        let plan = QueryPlan::build(&pattern("?s", "Likes", "?o"), &store);

        assert_eq!(by_key(plan.execute(&store)), by_key(store.query_xpx(likes)));
    }
}
