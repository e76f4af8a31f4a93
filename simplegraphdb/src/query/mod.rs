//! Query front-end and executor for the triple store.
//!
//! Supports a single-pattern subset of SPARQL:
//!
//! ```text
//! SELECT ?x, ?y WHERE { ?x 'Likes' ?y }
//! ```
//!
//! A query flows through [`parser`], [`validate`], [`planner`] and finally the
//! [`QueryEngine`], which projects the matching triples into text rows.
//!
//! # Example
//!
//! ```
//! use simplegraphdb::hexastore::Hexastore;
//! use simplegraphdb::query::run_query;
//!
//! let mut store = Hexastore::new();
//! store.add("Apple", "Likes", "Banana", "v");
//!
//! let result = run_query("SELECT ?x WHERE { ?x 'Likes' 'Banana' }", &store)?;
//! assert_eq!(result.rows, vec![vec!["Apple".to_owned()]]);
//! # Ok::<(), simplegraphdb::query::QueryError>(())
//! ```

pub mod engine;
mod lexer;
pub mod parser;
pub mod planner;
pub mod types;
pub mod validate;

pub use engine::{QueryEngine, QueryError, run_query};
pub use parser::{ParseError, parse};
pub use planner::{PatternShape, QueryPlan};
pub use types::{
    IgnoredClause, Projection, QueryResult, QueryRow, Role, SelectQuery, Slot, TriplePattern,
    Variable,
};
pub use validate::{ValidationError, validate};
