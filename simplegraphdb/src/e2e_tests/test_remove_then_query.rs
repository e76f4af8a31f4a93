//! Test that removed triples disappear from every query shape.

use crate::e2e_tests::helpers::*;

#[test]
fn test_removed_triple_not_returned() {
    let mut store = fruit_store();
    assert!(store.remove_terms("Apple", "Likes", "Banana"));

    assert!(select(&store, "SELECT * WHERE { 'Apple' 'Likes' 'Banana' }").is_empty());
    assert!(select(&store, "SELECT ?p WHERE { 'Apple' ?p 'Banana' }").is_empty());
    assert!(select(&store, "SELECT ?s WHERE { ?s 'Likes' 'Banana' }").is_empty());
    assert_eq!(
        sorted_rows(&select(&store, "SELECT ?o WHERE { 'Apple' 'Likes' ?o }")),
        rows(&[&["Apple"], &["Cow"]])
    );
    assert_eq!(
        sorted_rows(&select(&store, "SELECT ?p, ?o WHERE { 'Apple' ?p ?o }")),
        rows(&[&["Likes", "Apple"], &["Likes", "Cow"]])
    );
    assert_eq!(
        sorted_rows(&select(&store, "SELECT ?s, ?p WHERE { ?s ?p 'Banana' }")),
        rows(&[&["Cow", "Dislikes"]])
    );
    assert_eq!(
        select(&store, "SELECT ?s, ?o WHERE { ?s 'Likes' ?o }").len(),
        3
    );

    let everything = select(&store, "SELECT ?s, ?p, ?o WHERE { ?s ?p ?o }");
    assert_eq!(everything.len(), 5);
    assert!(
        !everything
            .rows
            .contains(&vec!["Apple".to_owned(), "Likes".to_owned(), "Banana".to_owned()])
    );
}

#[test]
fn test_remove_then_add_again() {
    let mut store = fruit_store();
    store.remove_terms("Cow", "Likes", "Apple");
    store.add("Cow", "Likes", "Apple", "again");

    let result = select(&store, "SELECT ?x WHERE { ?x 'Likes' 'Apple' }");

    assert_eq!(sorted_rows(&result), rows(&[&["Apple"], &["Cow"]]));
}

#[test]
fn test_removing_absent_triple_is_noop() {
    let mut store = fruit_store();

    assert!(!store.remove_terms("Banana", "Likes", "Apple"));
    assert!(!store.remove_terms("Pear", "Likes", "Apple"));

    assert_eq!(store.len(), 6);
}
