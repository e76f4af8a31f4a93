//! Test two projected variables in pattern order.

use crate::e2e_tests::helpers::*;

#[test]
fn test_who_dislikes_whom() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?x, ?y WHERE { ?x 'Dislikes' ?y }");

    assert_eq!(columns(&result), vec!["?x", "?y"]);
    assert_eq!(
        sorted_rows(&result),
        rows(&[&["Cow", "Banana"], &["Banana", "Cow"]])
    );
}

#[test]
fn test_everything_about_cow() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?p, ?o WHERE { 'Cow' ?p ?o }");

    assert_eq!(
        sorted_rows(&result),
        rows(&[&["Dislikes", "Banana"], &["Likes", "Apple"]])
    );
}
