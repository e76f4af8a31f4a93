//! End-to-end tests at the query text level.
//!
//! Each test file covers a specific scenario: triples go in through the store
//! API or a data file, query text goes through the full
//! parse/validate/plan/execute/project cycle, and rows come back as strings.

#![cfg(test)]

mod helpers;

mod test_determinism;
mod test_duplicate_projection;
mod test_load_and_present;
mod test_malformed_query;
mod test_predicate_variable;
mod test_projection_order;
mod test_remove_then_query;
mod test_select_star;
mod test_simulation;
mod test_single_variable;
mod test_two_variables;
mod test_unbound_projection;
mod test_unknown_term;
