//! Query types for the simple SPARQL dialect.
//!
//! This module defines the structures the parser produces and the engine
//! consumes:
//! - `Variable` - a `?name` placeholder
//! - `Slot` - one position of the triple pattern, a variable or a literal
//! - `TriplePattern` - subject, predicate and object slots in fixed order
//! - `SelectQuery` - projection plus pattern
//! - `QueryResult` - projected columns and rows of text

use std::fmt;

/// A query variable.
///
/// The name is stored without the leading `?`; `Display` adds it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// The role a slot plays in a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Subject,
    Predicate,
    Object,
}

/// One position of a triple pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A variable to be bound by the matching triples.
    Variable(Variable),
    /// A term that must match exactly.
    Literal(String),
}

impl Slot {
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    #[must_use]
    pub const fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(v) => Some(v),
            Self::Literal(_) => None,
        }
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Variable(_) => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "{v}"),
            Self::Literal(text) => write!(f, "'{text}'"),
        }
    }
}

/// A single triple pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Slot,
    pub predicate: Slot,
    pub object: Slot,
}

impl TriplePattern {
    #[must_use]
    pub const fn new(subject: Slot, predicate: Slot, object: Slot) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// The three slots with their roles, in subject, predicate, object order.
    #[must_use]
    pub const fn slots(&self) -> [(Role, &Slot); 3] {
        [
            (Role::Subject, &self.subject),
            (Role::Predicate, &self.predicate),
            (Role::Object, &self.object),
        ]
    }

    /// The variable slots with their roles, in pattern order.
    pub fn variables(&self) -> impl Iterator<Item = (Role, &Variable)> {
        self.slots()
            .into_iter()
            .filter_map(|(role, slot)| slot.as_variable().map(|v| (role, v)))
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} {} {} }}", self.subject, self.predicate, self.object)
    }
}

/// What a SELECT returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `SELECT *`: every pattern variable, in pattern order.
    All,
    /// An explicit list, in written order.
    Variables(Vec<Variable>),
}

/// A clause the grammar accepts but the engine does not act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredClause {
    Distinct,
    All,
    Limit(String),
    Offset(String),
    GroupBy(Variable),
}

impl fmt::Display for IgnoredClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distinct => f.write_str("DISTINCT"),
            Self::All => f.write_str("ALL"),
            Self::Limit(n) => write!(f, "LIMIT {n}"),
            Self::Offset(n) => write!(f, "OFFSET {n}"),
            Self::GroupBy(v) => write!(f, "GROUP BY {v}"),
        }
    }
}

/// A parsed query: one projection over one triple pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub projection: Projection,
    pub pattern: TriplePattern,
    pub ignored_clauses: Vec<IgnoredClause>,
}

impl SelectQuery {
    #[must_use]
    pub const fn new(projection: Projection, pattern: TriplePattern) -> Self {
        Self {
            projection,
            pattern,
            ignored_clauses: Vec::new(),
        }
    }

    /// The variables the result will contain, in output order.
    #[must_use]
    pub fn projected_variables(&self) -> Vec<&Variable> {
        match &self.projection {
            Projection::All => self.pattern.variables().map(|(_, v)| v).collect(),
            Projection::Variables(vars) => vars.iter().collect(),
        }
    }
}

/// A row of query results, one value per column.
pub type QueryRow = Vec<String>;

/// Query results.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// The projected variable names, `?` included, in output order.
    pub columns: Vec<String>,
    /// The result rows. Row order is unspecified.
    pub rows: Vec<QueryRow>,
}

impl QueryResult {
    #[must_use]
    pub const fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: QueryRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row followed by the data rows.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.columns.clone());
        grid.extend(self.rows.iter().cloned());
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_display() {
        assert_eq!(Variable::new("x").to_string(), "?x");
    }

    #[test]
    fn test_pattern_variables_in_order() {
        let pattern = TriplePattern::new(Slot::var("x"), Slot::literal("Likes"), Slot::var("y"));
        let vars: Vec<_> = pattern.variables().collect();
        assert_eq!(
            vars,
            vec![
                (Role::Subject, &Variable::new("x")),
                (Role::Object, &Variable::new("y")),
            ]
        );
    }

    #[test]
    fn test_projected_variables_for_star() {
        let query = SelectQuery::new(
            Projection::All,
            TriplePattern::new(Slot::var("s"), Slot::var("p"), Slot::literal("Cow")),
        );
        let names: Vec<_> = query
            .projected_variables()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["?s", "?p"]);
    }

    #[test]
    fn test_to_grid_puts_header_first() {
        let mut result = QueryResult::with_columns(vec!["?x".to_owned()]);
        result.push(vec!["Apple".to_owned()]);

        assert_eq!(result.len(), 1);
        assert_eq!(
            result.to_grid(),
            vec![vec!["?x".to_owned()], vec!["Apple".to_owned()]]
        );
    }

    #[test]
    fn test_pattern_display() {
        let pattern = TriplePattern::new(Slot::var("x"), Slot::literal("Likes"), Slot::var("y"));
        assert_eq!(pattern.to_string(), "{ ?x 'Likes' ?y }");
    }
}
