//! Core value types shared by the store and the query layer.

mod ids;
mod triple;

pub use ids::{EntityId, PredicateId, TermId};
pub use triple::{Triple, TripleRecord};
