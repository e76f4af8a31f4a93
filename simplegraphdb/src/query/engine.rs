//! Query engine implementation.
//!
//! The `QueryEngine` evaluates SELECT queries against a hexastore:
//! parse, validate, plan, execute, project. Each stage either succeeds or
//! stops the query with an error; no stage produces partial results.

use std::fmt;

use super::parser::{ParseError, parse};
use super::planner::QueryPlan;
use super::types::{QueryResult, QueryRow, Role, SelectQuery};
use super::validate::{ValidationError, validate};
use crate::hexastore::Hexastore;
use crate::types::Triple;

/// Error returned when a query cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query text is malformed.
    Parse(ParseError),
    /// The query is well-formed but uses variables inconsistently.
    Validation(ValidationError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Validation(e) => write!(f, "invalid query: {e}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Validation(e) => Some(e),
        }
    }
}

impl From<ParseError> for QueryError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ValidationError> for QueryError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// The query engine evaluates queries against a hexastore.
///
/// The engine only borrows the store immutably, so it can never change the
/// store or its dictionaries.
pub struct QueryEngine<'a> {
    store: &'a Hexastore,
}

impl<'a> QueryEngine<'a> {
    #[must_use]
    pub const fn new(store: &'a Hexastore) -> Self {
        Self { store }
    }

    /// Parse and execute query text.
    pub fn run(&self, text: &str) -> Result<QueryResult, QueryError> {
        let query = parse(text)?;
        self.execute(&query)
    }

    /// Execute a parsed query and return results.
    pub fn execute(&self, query: &SelectQuery) -> Result<QueryResult, QueryError> {
        validate(query)?;
        for clause in &query.ignored_clauses {
            tracing::warn!("Ignoring unsupported clause: {clause}");
        }

        let plan = QueryPlan::build(&query.pattern, self.store);
        if let QueryPlan::Empty { shape, unresolved } = &plan {
            tracing::debug!("{shape} pattern names unknown term '{unresolved}'");
        }

        let triples = plan.execute(self.store);
        tracing::debug!(
            "{} pattern {} matched {} triples",
            plan.shape(),
            query.pattern,
            triples.len()
        );

        Ok(self.project(query, &triples))
    }

    /// Turn matching triples into rows of projected variable values.
    ///
    /// Pre-condition: `query` passed validation, so every projected variable
    /// names exactly one pattern slot.
    fn project(&self, query: &SelectQuery, triples: &[Triple]) -> QueryResult {
        let slots: Vec<_> = query.pattern.variables().collect();
        let order: Vec<Role> = query
            .projected_variables()
            .into_iter()
            .filter_map(|wanted| {
                slots
                    .iter()
                    .find(|(_, variable)| *variable == wanted)
                    .map(|(role, _)| *role)
            })
            .collect();

        let columns = query
            .projected_variables()
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut result = QueryResult::with_columns(columns);

        for triple in triples {
            let row: QueryRow = order
                .iter()
                .map(|&role| self.term(triple, role).to_owned())
                .collect();
            result.push(row);
        }
        result
    }

    fn term(&self, triple: &Triple, role: Role) -> &'a str {
        let term = match role {
            Role::Subject => self.store.resolve_entity(triple.subject),
            Role::Predicate => self.store.resolve_property(triple.predicate),
            Role::Object => self.store.resolve_entity(triple.object),
        };
        term.unwrap_or_default()
    }
}

/// Run `text` against `store`.
pub fn run_query(text: &str, store: &Hexastore) -> Result<QueryResult, QueryError> {
    QueryEngine::new(store).run(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fruit_store;

    fn sorted_rows(result: &QueryResult) -> Vec<Vec<&str>> {
        let mut rows: Vec<Vec<&str>> = result
            .rows
            .iter()
            .map(|row| row.iter().map(String::as_str).collect())
            .collect();
        rows.sort();
        rows
    }

    #[test]
    fn test_single_variable_subject() {
        let store = fruit_store();
        let result = run_query("SELECT ?x WHERE { ?x 'Likes' 'Banana' }", &store).unwrap();

        assert_eq!(result.columns, vec!["?x"]);
        assert_eq!(sorted_rows(&result), vec![vec!["Apple"]]);
    }

    #[test]
    fn test_projection_order_follows_select() {
        let store = fruit_store();
        let result = run_query("SELECT ?o, ?s WHERE { ?s 'Dislikes' ?o }", &store).unwrap();

        assert_eq!(result.columns, vec!["?o", "?s"]);
        assert_eq!(
            sorted_rows(&result),
            vec![vec!["Banana", "Cow"], vec!["Cow", "Banana"]]
        );
    }

    #[test]
    fn test_unprojected_pattern_variable_is_dropped() {
        let store = fruit_store();
        let result = run_query("SELECT ?s WHERE { ?s ?p 'Cow' }", &store).unwrap();

        assert_eq!(result.columns, vec!["?s"]);
        assert_eq!(sorted_rows(&result), vec![vec!["Apple"], vec!["Banana"]]);
    }

    #[test]
    fn test_predicate_variable_resolves_through_predicate_dictionary() {
        let store = fruit_store();
        let result = run_query("SELECT ?p WHERE { 'Cow' ?p 'Apple' }", &store).unwrap();
        assert_eq!(sorted_rows(&result), vec![vec!["Likes"]]);
    }

    #[test]
    fn test_select_star_uses_pattern_order() {
        let store = fruit_store();
        let result = run_query("SELECT * WHERE { ?s 'Likes' ?o }", &store).unwrap();

        assert_eq!(result.columns, vec!["?s", "?o"]);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_fully_bound_pattern_has_no_columns() {
        let store = fruit_store();
        let result = run_query("SELECT * WHERE { 'Apple' 'Likes' 'Cow' }", &store).unwrap();

        assert!(result.columns.is_empty());
        assert_eq!(result.rows, vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_unknown_literal_is_empty_not_error() {
        let store = fruit_store();
        let result = run_query("SELECT ?x WHERE { ?x 'Hates' 'Cow' }", &store).unwrap();

        assert_eq!(result.columns, vec!["?x"]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_error_is_returned() {
        let store = fruit_store();
        let err = run_query("SELECT WHERE { ?x 'Likes' 'Banana' }", &store).unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));
    }

    #[test]
    fn test_validation_error_is_returned() {
        let store = fruit_store();
        let err = run_query("SELECT ?y WHERE { ?x 'Likes' 'Banana' }", &store).unwrap_err();

        assert!(matches!(
            err,
            QueryError::Validation(ValidationError::UnboundProjection(_))
        ));
        assert_eq!(
            err.to_string(),
            "invalid query: projected variable ?y not bound by pattern"
        );
    }

    #[test]
    fn test_ignored_clauses_do_not_change_results() {
        let store = fruit_store();
        let plain = run_query("SELECT ?x WHERE { ?x 'Likes' ?y }", &store);
        let modified = run_query(
            "SELECT DISTINCT ?x WHERE { ?x 'Likes' ?y } LIMIT 1 OFFSET 1",
            &store,
        );

        assert_eq!(
            sorted_rows(&plain.unwrap()),
            sorted_rows(&modified.unwrap())
        );
    }

    #[test]
    fn test_queries_do_not_mutate_store() {
        let store = fruit_store();
        let before = (store.len(), store.entities().len(), store.properties().len());

        let _ = run_query("SELECT ?x WHERE { ?x 'Eats' 'Grass' }", &store);

        assert_eq!(
            (store.len(), store.entities().len(), store.properties().len()),
            before
        );
    }
}
