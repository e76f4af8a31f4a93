//! Test a single projected subject variable with bound predicate and object.

use crate::e2e_tests::helpers::*;

#[test]
fn test_who_likes_banana() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?x WHERE { ?x 'Likes' 'Banana' }");

    assert_eq!(columns(&result), vec!["?x"]);
    assert_eq!(sorted_rows(&result), rows(&[&["Apple"]]));
}

#[test]
fn test_what_apple_likes() {
    let store = fruit_store();

    let result = select(&store, "SELECT ?y WHERE { 'Apple' 'Likes' ?y }");

    assert_eq!(
        sorted_rows(&result),
        rows(&[&["Apple"], &["Banana"], &["Cow"]])
    );
}

#[test]
fn test_double_quoted_literals() {
    let store = fruit_store();

    let result = select(&store, r#"SELECT ?x WHERE { ?x "Dislikes" "Cow" }"#);

    assert_eq!(sorted_rows(&result), rows(&[&["Banana"]]));
}
