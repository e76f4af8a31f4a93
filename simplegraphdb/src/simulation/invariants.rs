//! Invariant checking for deterministic simulation testing.
//!
//! The simulator keeps a plain map of `(subject, predicate, object)` terms to
//! payload alongside the store. After every operation the checker compares the
//! two and inspects the store's internal structure.

use std::collections::HashMap;

use crate::hexastore::{Hexastore, IndexOrdering};
use crate::query::run_query;

/// Reference model of the store contents.
pub type Model = HashMap<(String, String, String), String>;

/// A detected invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violation.
    pub description: String,
    /// Operation index where it was detected.
    pub operation_index: usize,
    /// Additional context.
    pub context: String,
}

/// Checker for store invariants.
#[derive(Debug, Default)]
pub struct InvariantChecker {
    violations: Vec<InvariantViolation>,
}

impl InvariantChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_violation(&mut self, violation: InvariantViolation) {
        self.violations.push(violation);
    }

    fn violation(&mut self, index: usize, description: &str, context: String) {
        self.add_violation(InvariantViolation {
            description: description.to_owned(),
            operation_index: index,
            context,
        });
    }

    /// Compare the whole store against `model`.
    ///
    /// Checks the stored-triple count, that every model triple is reachable
    /// with its payload through all six orderings, that partner orderings
    /// share leaves, that a full scan returns exactly the model, and that
    /// both dictionaries map terms and ids back and forth.
    pub fn check_store(&mut self, store: &Hexastore, model: &Model, index: usize) {
        if store.len() != model.len() {
            self.violation(
                index,
                "stored triple count differs from model",
                format!("store={} model={}", store.len(), model.len()),
            );
        }

        for ((s, p, o), value) in model {
            let (Some(subject), Some(predicate), Some(object)) =
                (store.entity_id(s), store.predicate_id(p), store.entity_id(o))
            else {
                self.violation(index, "model triple has unknown term", format!("{s} {p} {o}"));
                continue;
            };

            for ordering in IndexOrdering::ALL {
                let found = store.probe(ordering, subject, predicate, object);
                if found != Some(value.as_str()) {
                    self.violation(
                        index,
                        "ordering disagrees with model",
                        format!("{ordering} {s} {p} {o}: expected {value}, found {found:?}"),
                    );
                }
            }
            if !store.shares_leaves(subject, predicate, object) {
                self.violation(
                    index,
                    "partner orderings do not share a leaf",
                    format!("{s} {p} {o}"),
                );
            }
        }

        let mut scanned = Model::new();
        for triple in store.query_xxx() {
            let key = (
                store.resolve_entity(triple.subject).unwrap_or_default().to_owned(),
                store
                    .resolve_property(triple.predicate)
                    .unwrap_or_default()
                    .to_owned(),
                store.resolve_entity(triple.object).unwrap_or_default().to_owned(),
            );
            if scanned.insert(key.clone(), triple.value).is_some() {
                self.violation(index, "full scan returned a triple twice", format!("{key:?}"));
            }
        }
        if scanned != *model {
            self.violation(
                index,
                "full scan differs from model",
                format!("scan={} model={}", scanned.len(), model.len()),
            );
        }

        for (id, term) in store.entities().iter() {
            if store.entity_id(term) != Some(id) {
                self.violation(index, "entity dictionary is not a bijection", term.to_owned());
            }
        }
        for (id, term) in store.properties().iter() {
            if store.predicate_id(term) != Some(id) {
                self.violation(
                    index,
                    "predicate dictionary is not a bijection",
                    term.to_owned(),
                );
            }
        }
    }

    /// Run a `SELECT *` query for the pattern and compare its rows against the
    /// matching model triples.
    pub fn check_query(
        &mut self,
        store: &Hexastore,
        model: &Model,
        pattern: [Option<&str>; 3],
        index: usize,
    ) {
        let names = ["s", "p", "o"];
        let slots: Vec<String> = pattern
            .iter()
            .zip(names)
            .map(|(term, name)| term.map_or_else(|| format!("?{name}"), |t| format!("'{t}'")))
            .collect();
        let text = format!("SELECT * WHERE {{ {} }}", slots.join(" "));

        let mut actual = match run_query(&text, store) {
            Ok(result) => result.rows,
            Err(e) => {
                self.violation(index, "generated query failed", format!("{text}: {e}"));
                return;
            }
        };

        let mut expected: Vec<Vec<String>> = model
            .keys()
            .filter_map(|(s, p, o)| {
                let terms = [s, p, o];
                let matches = pattern
                    .iter()
                    .zip(terms)
                    .all(|(bound, term)| bound.is_none_or(|b| b == term.as_str()));
                matches.then(|| {
                    pattern
                        .iter()
                        .zip(terms)
                        .filter(|(bound, _)| bound.is_none())
                        .map(|(_, term)| term.clone())
                        .collect()
                })
            })
            .collect();

        actual.sort();
        expected.sort();
        if actual != expected {
            self.violation(
                index,
                "query rows differ from model",
                format!("{text}: got {} rows, expected {}", actual.len(), expected.len()),
            );
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    #[must_use]
    pub const fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FIXTURE_VALUE, FRUIT_TRIPLES, fruit_store};

    fn fruit_model() -> Model {
        FRUIT_TRIPLES
            .iter()
            .map(|&(s, p, o)| {
                (
                    (s.to_owned(), p.to_owned(), o.to_owned()),
                    FIXTURE_VALUE.to_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_consistent_store_has_no_violations() {
        let store = fruit_store();
        let model = fruit_model();
        let mut checker = InvariantChecker::new();

        checker.check_store(&store, &model, 0);
        checker.check_query(&store, &model, [None, Some("Likes"), None], 1);
        checker.check_query(&store, &model, [Some("Cow"), None, Some("Apple")], 2);
        checker.check_query(&store, &model, [Some("Pear"), None, None], 3);

        assert!(!checker.has_violations(), "{:?}", checker.violations());
    }

    #[test]
    fn test_detects_missing_triple() {
        let mut store = fruit_store();
        store.remove_terms("Apple", "Likes", "Cow");
        let model = fruit_model();
        let mut checker = InvariantChecker::new();

        checker.check_store(&store, &model, 5);

        assert!(checker.has_violations());
        assert!(checker.violations().iter().all(|v| v.operation_index == 5));
    }

    #[test]
    fn test_detects_stale_value() {
        let mut store = fruit_store();
        store.add("Apple", "Likes", "Cow", "changed");
        let model = fruit_model();
        let mut checker = InvariantChecker::new();

        checker.check_store(&store, &model, 0);

        assert!(
            checker
                .violations()
                .iter()
                .any(|v| v.description == "ordering disagrees with model")
        );
    }
}
