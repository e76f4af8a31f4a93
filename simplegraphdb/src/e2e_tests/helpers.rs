//! Common helpers for end-to-end tests.

use crate::hexastore::Hexastore;
use crate::query::{QueryError, QueryResult, run_query};
pub use crate::testing::fruit_store;

/// Run `text` against `store`, panicking on any error.
pub fn select(store: &Hexastore, text: &str) -> QueryResult {
    match run_query(text, store) {
        Ok(result) => result,
        Err(e) => panic!("query {text:?} failed: {e}"),
    }
}

/// Run `text` against `store`, panicking if it succeeds.
pub fn select_err(store: &Hexastore, text: &str) -> QueryError {
    match run_query(text, store) {
        Ok(result) => panic!("query {text:?} unexpectedly returned {result:?}"),
        Err(e) => e,
    }
}

/// Rows sorted for order-independent comparison.
pub fn sorted_rows(result: &QueryResult) -> Vec<Vec<String>> {
    let mut rows = result.rows.clone();
    rows.sort();
    rows
}

/// Build expected rows from string slices, sorted.
pub fn rows(expected: &[&[&str]]) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = expected
        .iter()
        .map(|row| row.iter().map(|&cell| cell.to_owned()).collect())
        .collect();
    rows.sort();
    rows
}

/// Column names of a result, for comparison against literals.
pub fn columns(result: &QueryResult) -> Vec<&str> {
    result.columns.iter().map(String::as_str).collect()
}
