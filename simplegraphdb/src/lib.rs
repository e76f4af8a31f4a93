// Life of a query:
// 1. Text comes in from the shell
// 2. Tokenize and parse into a SelectQuery
// 3. Validate variable usage
// 4. Classify the triple pattern and resolve literals to ids
// 5. Run the matching hexastore query
// 6. Project triples into rows of terms
// 7. Render the rows as a table
//
// System components:
//  - Dictionaries (term <-> id)
//  - Hexastore (six orderings over three shared leaf families)
//  - Query front-end, planner and engine
//  - Loader and presentation for the shell

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod config;
pub mod dictionary;
mod e2e_tests;
pub mod hexastore;
pub mod loader;
pub mod presentation;
pub mod query;
pub mod simulation;
#[cfg(test)]
mod testing;
pub mod types;

pub use dictionary::Dictionary;
pub use hexastore::Hexastore;
pub use query::{QueryEngine, QueryError, QueryResult, run_query};
