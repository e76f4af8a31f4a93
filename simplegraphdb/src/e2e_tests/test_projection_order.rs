//! Test that columns follow the SELECT list, not the pattern.

use crate::e2e_tests::helpers::*;

#[test]
fn test_swapped_columns() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?y, ?x WHERE { ?x 'Likes' ?y }");

    assert_eq!(columns(&result), vec!["?y", "?x"]);
    assert_eq!(
        sorted_rows(&result),
        rows(&[
            &["Cow", "Apple"],
            &["Banana", "Apple"],
            &["Apple", "Apple"],
            &["Apple", "Cow"],
        ])
    );
}

#[test]
fn test_three_columns_reversed() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?o, ?p, ?s WHERE { ?s ?p ?o }");

    assert_eq!(columns(&result), vec!["?o", "?p", "?s"]);
    assert_eq!(result.len(), 6);
    assert!(
        result
            .rows
            .contains(&vec!["Banana".to_owned(), "Dislikes".to_owned(), "Cow".to_owned()])
    );
}
