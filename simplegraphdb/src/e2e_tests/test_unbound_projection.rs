//! Test that projecting a variable absent from the pattern is rejected.

use crate::e2e_tests::helpers::*;
use crate::query::{QueryError, ValidationError, Variable};

#[test]
fn test_projected_variable_not_in_pattern() {
    let store = fruit_store();

    let err = select_err(&store, "SELECT ?y, ?x WHERE { ?x 'Likes' 'Stuff' }");

    assert_eq!(
        err,
        QueryError::Validation(ValidationError::UnboundProjection(Variable::new("y")))
    );
    assert!(
        err.to_string()
            .contains("projected variable ?y not bound by pattern")
    );
}

#[test]
fn test_store_unchanged_after_error() {
    let store = fruit_store();
    let before = store.len();

    let _ = select_err(&store, "SELECT ?z WHERE { ?x 'Likes' ?y }");

    assert_eq!(store.len(), before);
    assert_eq!(store.entity_id("Stuff"), None);
}
