//! Test that malformed query text yields a parse error, not a panic.

use crate::e2e_tests::helpers::*;
use crate::query::QueryError;

#[test]
fn test_missing_projection() {
    let store = fruit_store();

    let err = select_err(&store, "SELECT WHERE { ?x 'Likes' 'Banana' }");

    let QueryError::Parse(parse_error) = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(parse_error.offset, 7);
}

#[test]
fn test_assorted_malformed_queries() {
    let store = fruit_store();
    let queries = [
        "",
        "SELECT",
        "SELECT ?x",
        "SELECT ?x WHERE",
        "SELECT ?x WHERE { ?x 'Likes' }",
        "SELECT ?x WHERE { ?x 'Likes' 'Banana'",
        "SELECT ?x WHERE { ?x Likes 'Banana' }",
        "SELECT ?x WHERE { ?x 'Likes 'Banana' }",
        "SELECT ?x WHERE { ?x 'Likes' 'Banana' } trailing",
        "INSERT ?x WHERE { ?x 'Likes' 'Banana' }",
    ];

    for text in queries {
        assert!(
            matches!(select_err(&store, text), QueryError::Parse(_)),
            "{text:?} should not parse"
        );
    }
}
