//! Test patterns with a free predicate, including subject-object lookups.

use crate::e2e_tests::helpers::*;

#[test]
fn test_relation_between_two_entities() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?p WHERE { 'Cow' ?p 'Banana' }");

    assert_eq!(sorted_rows(&result), rows(&[&["Dislikes"]]));
}

#[test]
fn test_relation_after_adding_second_predicate() {
    let mut store = fruit_store();
    store.add("Cow", "Eats", "Banana", "v");

    let result = select(&store, "SELECT ?p WHERE { 'Cow' ?p 'Banana' }");

    assert_eq!(sorted_rows(&result), rows(&[&["Dislikes"], &["Eats"]]));
}

#[test]
fn test_everything_pointing_at_cow() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?s, ?p WHERE { ?s ?p 'Cow' }");

    assert_eq!(
        sorted_rows(&result),
        rows(&[&["Apple", "Likes"], &["Banana", "Dislikes"]])
    );
}
