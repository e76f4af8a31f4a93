//! Semantic checks run between parsing and planning.
//!
//! A query that parses can still be meaningless: a projected variable may be
//! listed twice, the pattern may reuse a variable (which would need a join the
//! engine does not do), or a projected variable may never be bound. Checks
//! run in that order and the first failure wins.

use std::collections::HashSet;
use std::fmt;

use super::types::{Projection, SelectQuery, Variable};

/// Well-formed query text that cannot be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A variable appears twice in the projection list.
    DuplicateProjection(Variable),
    /// A variable appears in more than one slot of the triple pattern.
    DuplicatePatternVariable(Variable),
    /// A projected variable does not occur in the triple pattern.
    UnboundProjection(Variable),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProjection(v) => write!(f, "duplicate projected variable {v}"),
            Self::DuplicatePatternVariable(v) => write!(f, "duplicate pattern variable {v}"),
            Self::UnboundProjection(v) => {
                write!(f, "projected variable {v} not bound by pattern")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that `query` can be executed against a single triple pattern.
pub fn validate(query: &SelectQuery) -> Result<(), ValidationError> {
    if let Projection::Variables(projected) = &query.projection {
        let mut seen = HashSet::new();
        for variable in projected {
            if !seen.insert(variable) {
                return Err(ValidationError::DuplicateProjection(variable.clone()));
            }
        }
    }

    let mut bound = HashSet::new();
    for (_, variable) in query.pattern.variables() {
        if !bound.insert(variable) {
            return Err(ValidationError::DuplicatePatternVariable(variable.clone()));
        }
    }

    let Projection::Variables(projected) = &query.projection else {
        return Ok(());
    };
    projected
        .iter()
        .find(|v| !bound.contains(v))
        .map_or(Ok(()), |unbound| {
            Err(ValidationError::UnboundProjection(unbound.clone()))
        })
}
