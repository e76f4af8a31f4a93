//! Test `SELECT *` and the clauses that are accepted but not applied.

use crate::e2e_tests::helpers::*;

#[test]
fn test_star_projects_pattern_variables_in_order() {
    let store = fruit_store();

    let result = select(&store, "SELECT * WHERE { ?who 'Dislikes' ?whom }");

    assert_eq!(columns(&result), vec!["?who", "?whom"]);
    assert_eq!(
        sorted_rows(&result),
        rows(&[&["Banana", "Cow"], &["Cow", "Banana"]])
    );
}

#[test]
fn test_fully_bound_pattern_is_existence_check() {
    let store = fruit_store();

    let hit = select(&store, "SELECT * WHERE { 'Apple' 'Likes' 'Apple' }");
    let miss = select(&store, "SELECT * WHERE { 'Banana' 'Likes' 'Apple' }");

    assert_eq!(hit.len(), 1);
    assert!(miss.is_empty());
}

#[test]
fn test_modifiers_are_ignored() {
    let store = fruit_store();

    let plain = select(&store, "SELECT ?x WHERE { ?x 'Likes' ?y }");
    let modified = select(
        &store,
        "select distinct ?x where { ?x 'Likes' ?y . } limit 1 offset 2 group by ?x",
    );

    assert_eq!(sorted_rows(&plain), sorted_rows(&modified));
    assert_eq!(modified.len(), 4);
}
