//! Test that literals the store has never seen match nothing.

use crate::e2e_tests::helpers::*;

#[test]
fn test_unknown_predicate() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?x WHERE { ?x 'Eats' 'Banana' }");

    assert_eq!(columns(&result), vec!["?x"]);
    assert!(result.is_empty());
}

#[test]
fn test_unknown_entity() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?p, ?o WHERE { 'Pear' ?p ?o }");

    assert!(result.is_empty());
}

#[test]
fn test_known_terms_without_match() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?x WHERE { ?x 'Dislikes' 'Apple' }");

    assert!(result.is_empty());
}

#[test]
fn test_lookups_do_not_grow_dictionaries() {
    let store = fruit_store();
    let entities = store.entities().len();
    let properties = store.properties().len();

    let _ = select(&store, "SELECT ?x WHERE { 'Pear' 'Eats' ?x }");

    assert_eq!(store.entities().len(), entities);
    assert_eq!(store.properties().len(), properties);
}
