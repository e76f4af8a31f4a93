//! Test that a variable listed twice in SELECT is rejected.

use crate::e2e_tests::helpers::*;
use crate::query::{QueryError, ValidationError, Variable};

#[test]
fn test_duplicate_projected_variable() {
    let store = fruit_store();

    let err = select_err(&store, "SELECT ?x, ?x WHERE { ?x 'Likes' ?y }");

    assert_eq!(
        err,
        QueryError::Validation(ValidationError::DuplicateProjection(Variable::new("x")))
    );
    assert!(err.to_string().contains("duplicate projected variable"));
}

#[test]
fn test_duplicate_pattern_variable() {
    let store = fruit_store();

    let err = select_err(&store, "SELECT ?x WHERE { ?x 'Likes' ?x }");

    assert!(matches!(
        err,
        QueryError::Validation(ValidationError::DuplicatePatternVariable(_))
    ));
}
