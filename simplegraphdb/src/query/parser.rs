//! Recursive-descent parser for the simple SPARQL dialect.
//!
//! Grammar:
//!
//! ```text
//! query      := SELECT [DISTINCT | ALL] projection WHERE '{' slot slot slot ['.'] '}' modifier* EOF
//! projection := '*' | VARIABLE (',' VARIABLE)*
//! slot       := VARIABLE | STRING
//! modifier   := LIMIT NUMBER | OFFSET NUMBER | GROUP BY VARIABLE
//! ```
//!
//! Parsing is pure: the same text always yields the same query or the same
//! error.

use std::fmt;

use super::lexer::{Keyword, Token, TokenKind, tokenize};
use super::types::{IgnoredClause, Projection, SelectQuery, Slot, TriplePattern, Variable};

/// Malformed query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable description.
    pub message: String,
    /// Byte offset in the query text where the problem was found.
    pub offset: usize,
}

impl ParseError {
    #[must_use]
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse query text into a [`SelectQuery`].
pub fn parse(input: &str) -> Result<SelectQuery, ParseError> {
    let tokens = tokenize(input)?;
    Parser::new(&tokens).parse_query()
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The current token. The stream always ends with `Eof`, which is never
    /// consumed, so this only falls back when given an empty slice.
    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos).or_else(|| self.tokens.last())
    }

    fn current_kind(&self) -> &'t TokenKind {
        self.current().map_or(&TokenKind::Eof, |token| &token.kind)
    }

    fn current_offset(&self) -> usize {
        self.current().map_or(0, |token| token.offset)
    }

    fn advance(&mut self) {
        if !matches!(self.current_kind(), TokenKind::Eof) {
            self.pos += 1;
        }
    }

    fn error(&self, expected: &str) -> ParseError {
        ParseError::new(
            format!("expected {expected}, found {}", self.current_kind()),
            self.current_offset(),
        )
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.current_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(&TokenKind::Keyword(keyword))
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn parse_query(&mut self) -> Result<SelectQuery, ParseError> {
        self.expect(&TokenKind::Keyword(Keyword::Select), "SELECT")?;

        let mut ignored_clauses = Vec::new();
        if self.eat_keyword(Keyword::Distinct) {
            ignored_clauses.push(IgnoredClause::Distinct);
        } else if self.eat_keyword(Keyword::All) {
            ignored_clauses.push(IgnoredClause::All);
        }

        let projection = self.parse_projection()?;
        let pattern = self.parse_where()?;
        self.parse_modifiers(&mut ignored_clauses)?;

        if !matches!(self.current_kind(), TokenKind::Eof) {
            return Err(self.error("end of query"));
        }

        Ok(SelectQuery {
            projection,
            pattern,
            ignored_clauses,
        })
    }

    fn parse_projection(&mut self) -> Result<Projection, ParseError> {
        if self.eat(&TokenKind::Star) {
            return Ok(Projection::All);
        }

        let mut variables = vec![self.parse_variable("a variable or '*' after SELECT")?];
        while self.eat(&TokenKind::Comma) {
            variables.push(self.parse_variable("a variable after ','")?);
        }
        Ok(Projection::Variables(variables))
    }

    fn parse_variable(&mut self, expected: &str) -> Result<Variable, ParseError> {
        match self.current_kind() {
            TokenKind::Variable(name) => {
                let variable = Variable::new(name.as_str());
                self.advance();
                Ok(variable)
            }
            _ => Err(self.error(expected)),
        }
    }

    fn parse_where(&mut self) -> Result<TriplePattern, ParseError> {
        self.expect(&TokenKind::Keyword(Keyword::Where), "WHERE clause")?;
        self.expect(&TokenKind::LBrace, "'{' after WHERE")?;

        let subject = self.parse_slot()?;
        let predicate = self.parse_slot()?;
        let object = self.parse_slot()?;

        self.eat(&TokenKind::Dot);
        self.expect(&TokenKind::RBrace, "'}' to close the WHERE clause")?;

        Ok(TriplePattern::new(subject, predicate, object))
    }

    fn parse_slot(&mut self) -> Result<Slot, ParseError> {
        let slot = match self.current_kind() {
            TokenKind::Variable(name) => Slot::var(name.as_str()),
            TokenKind::String(text) => Slot::literal(text.as_str()),
            _ => return Err(self.error("a variable or quoted literal in the triple pattern")),
        };
        self.advance();
        Ok(slot)
    }

    fn parse_modifiers(&mut self, clauses: &mut Vec<IgnoredClause>) -> Result<(), ParseError> {
        loop {
            if self.eat_keyword(Keyword::Limit) {
                clauses.push(IgnoredClause::Limit(self.parse_number("a number after LIMIT")?));
            } else if self.eat_keyword(Keyword::Offset) {
                clauses.push(IgnoredClause::Offset(self.parse_number("a number after OFFSET")?));
            } else if self.eat_keyword(Keyword::Group) {
                self.expect(&TokenKind::Keyword(Keyword::By), "BY after GROUP")?;
                clauses.push(IgnoredClause::GroupBy(
                    self.parse_variable("a variable after GROUP BY")?,
                ));
            } else {
                return Ok(());
            }
        }
    }

    fn parse_number(&mut self, expected: &str) -> Result<String, ParseError> {
        match self.current_kind() {
            TokenKind::Number(text) => {
                let number = text.clone();
                self.advance();
                Ok(number)
            }
            _ => Err(self.error(expected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_variable() {
        let query = parse("SELECT ?x WHERE { ?x 'Likes' 'Banana' }").unwrap();

        assert_eq!(
            query.projection,
            Projection::Variables(vec![Variable::new("x")])
        );
        assert_eq!(
            query.pattern,
            TriplePattern::new(Slot::var("x"), Slot::literal("Likes"), Slot::literal("Banana"))
        );
        assert!(query.ignored_clauses.is_empty());
    }

    #[test]
    fn test_parse_keeps_projection_order() {
        let query = parse("SELECT ?y, ?x WHERE { ?x 'Likes' ?y }").unwrap();
        assert_eq!(
            query.projection,
            Projection::Variables(vec![Variable::new("y"), Variable::new("x")])
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "SELECT ?a, ?b WHERE { ?a \"knows\" ?b }";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_parse_star_and_modifiers() {
        let query =
            parse("select distinct * where { ?s ?p 'Cow' . } LIMIT 10 OFFSET 2 GROUP BY ?s")
                .unwrap();

        assert_eq!(query.projection, Projection::All);
        assert_eq!(
            query.ignored_clauses,
            vec![
                IgnoredClause::Distinct,
                IgnoredClause::Limit("10".to_owned()),
                IgnoredClause::Offset("2".to_owned()),
                IgnoredClause::GroupBy(Variable::new("s")),
            ]
        );
    }

    #[test]
    fn test_literal_may_look_like_keyword() {
        let query = parse("SELECT ?x WHERE { ?x 'SELECT' \"WHERE\" }").unwrap();
        assert_eq!(query.pattern.predicate, Slot::literal("SELECT"));
        assert_eq!(query.pattern.object, Slot::literal("WHERE"));
    }

    #[test]
    fn test_missing_projection() {
        let err = parse("SELECT WHERE { ?x 'Likes' 'Banana' }").unwrap_err();
        assert_eq!(err.offset, 7);
        assert!(err.message.contains("after SELECT"));
    }

    #[test]
    fn test_missing_where() {
        let err = parse("SELECT ?x { ?x 'Likes' 'Banana' }").unwrap_err();
        assert!(err.message.contains("WHERE"));
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(parse("SELECT ?x WHERE { ?x 'Likes' 'Banana'").is_err());
        assert!(parse("SELECT ?x WHERE ?x 'Likes' 'Banana' }").is_err());
        assert!(parse("SELECT ?x WHERE { ?x 'Likes' 'Banana' } }").is_err());
    }

    #[test]
    fn test_unquoted_term_in_pattern() {
        let err = parse("SELECT ?x WHERE { ?x Likes 'Banana' }").unwrap_err();
        assert!(err.message.contains("identifier 'Likes'"));
    }

    #[test]
    fn test_two_patterns_rejected() {
        assert!(parse("SELECT ?x WHERE { ?x 'a' 'b' . ?x 'c' 'd' }").is_err());
    }

    #[test]
    fn test_missing_comma_between_variables() {
        assert!(parse("SELECT ?x ?y WHERE { ?x 'Likes' ?y }").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = parse("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error at offset 0: expected SELECT, found end of input"
        );
    }
}
