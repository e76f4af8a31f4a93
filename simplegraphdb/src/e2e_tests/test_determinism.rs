//! Test that the same inputs always produce the same ids and results.

use crate::e2e_tests::helpers::*;
use crate::hexastore::Hexastore;
use crate::testing::FRUIT_TRIPLES;

#[test]
fn test_identical_ids_across_builds() {
    let first = fruit_store();
    let second = fruit_store();

    for (subject, predicate, object) in FRUIT_TRIPLES {
        assert_eq!(first.entity_id(subject), second.entity_id(subject));
        assert_eq!(first.predicate_id(predicate), second.predicate_id(predicate));
        assert_eq!(first.entity_id(object), second.entity_id(object));
    }
}

#[test]
fn test_term_id_round_trip() {
    let store = fruit_store();

    for (id, term) in store.entities().iter() {
        assert_eq!(store.entity_id(term), Some(id));
        assert_eq!(store.resolve_entity(id), Some(term));
    }
    for (id, term) in store.properties().iter() {
        assert_eq!(store.predicate_id(term), Some(id));
    }
    assert_eq!(store.entities().len(), 3);
    assert_eq!(store.properties().len(), 2);
}

#[test]
fn test_same_query_same_rows() {
    let store = fruit_store();
    let text = "SELECT ?s, ?o WHERE { ?s 'Likes' ?o }";

    assert_eq!(
        sorted_rows(&select(&store, text)),
        sorted_rows(&select(&store, text))
    );
}

#[test]
fn test_latest_value_wins() {
    let mut store = Hexastore::new();
    store.add("Apple", "Likes", "Cow", "first");
    let triple = store.add("Apple", "Likes", "Cow", "second");

    let all = store.query_xxx();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], triple);
    assert_eq!(all[0].value, "second");
}
