//! Tokenizer for the simple SPARQL dialect.
//!
//! Recognises keywords (case-insensitive), identifiers, variables (`?name`),
//! numbers, single- or double-quoted strings and punctuation. Whitespace
//! separates tokens and is otherwise ignored. Each token carries the byte
//! offset it starts at, for error messages.

use std::fmt;

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::stream::Location;
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::parser::ParseError;

/// Reserved words of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Select,
    From,
    Distinct,
    All,
    Where,
    Group,
    By,
    Minus,
    Except,
    Intersect,
    Order,
    Limit,
    Offset,
    True,
    False,
    Null,
    Is,
    Not,
    Any,
    Between,
    And,
    Or,
    Like,
    As,
    In,
}

impl Keyword {
    const ALL: [(&'static str, Self); 25] = [
        ("SELECT", Self::Select),
        ("FROM", Self::From),
        ("DISTINCT", Self::Distinct),
        ("ALL", Self::All),
        ("WHERE", Self::Where),
        ("GROUP", Self::Group),
        ("BY", Self::By),
        ("MINUS", Self::Minus),
        ("EXCEPT", Self::Except),
        ("INTERSECT", Self::Intersect),
        ("ORDER", Self::Order),
        ("LIMIT", Self::Limit),
        ("OFFSET", Self::Offset),
        ("TRUE", Self::True),
        ("FALSE", Self::False),
        ("NULL", Self::Null),
        ("IS", Self::Is),
        ("NOT", Self::Not),
        ("ANY", Self::Any),
        ("BETWEEN", Self::Between),
        ("AND", Self::And),
        ("OR", Self::Or),
        ("LIKE", Self::Like),
        ("AS", Self::As),
        ("IN", Self::In),
    ];

    /// Case-insensitive keyword lookup.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(text, _)| text.eq_ignore_ascii_case(word))
            .map(|&(_, keyword)| keyword)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(_, keyword)| *keyword == self)
            .map_or("", |&(text, _)| text)
    }
}

/// Token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Ident(String),
    /// Variable name, without the `?`.
    Variable(String),
    /// Number, kept as written.
    Number(String),
    /// String literal with the quotes removed.
    String(String),
    Comma,
    Dot,
    Star,
    LBrace,
    RBrace,
    LParen,
    RParen,
    /// Any other operator (`=`, `<>`, `+`, ...).
    Operator(String),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(k) => write!(f, "keyword {}", k.as_str()),
            Self::Ident(name) => write!(f, "identifier '{name}'"),
            Self::Variable(name) => write!(f, "variable ?{name}"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::String(s) => write!(f, "string '{s}'"),
            Self::Comma => f.write_str("','"),
            Self::Dot => f.write_str("'.'"),
            Self::Star => f.write_str("'*'"),
            Self::LBrace => f.write_str("'{'"),
            Self::RBrace => f.write_str("'}'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::Operator(op) => write!(f, "operator '{op}'"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Input type for the lexer; tracks the byte offset of each token.
type Input<'a> = LocatingSlice<&'a str>;

/// Split `text` into tokens, ending with a single [`TokenKind::Eof`].
///
/// Stops at the first character that cannot start a token.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut input = LocatingSlice::new(text);

    loop {
        skip_whitespace(&mut input);
        let start = input.current_token_start();

        if input.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, start));
            return Ok(tokens);
        }

        match next_token(&mut input) {
            Ok(kind) => tokens.push(Token::new(kind, start)),
            Err(_) => return Err(lex_error(text, start)),
        }
    }
}

/// Describe why no token could start at `offset`.
fn lex_error(text: &str, offset: usize) -> ParseError {
    let message = match text.get(offset..).and_then(|rest| rest.chars().next()) {
        Some('?') => "expected a variable name after '?'".to_owned(),
        Some('\'' | '"') => "unterminated string literal".to_owned(),
        Some(c) => format!("unexpected character '{c}'"),
        None => "unexpected end of input".to_owned(),
    };
    ParseError::new(message, offset)
}

const fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn skip_whitespace(input: &mut Input<'_>) {
    let _: ModalResult<&str> = take_while(0.., char::is_whitespace).parse_next(input);
}

fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        parse_word,
        parse_variable,
        parse_string,
        // Before punctuation and operators: `.5` and `-2` are numbers.
        parse_number,
        parse_operator,
        parse_punctuation,
    ))
    .parse_next(input)
}

/// A letter or underscore followed by letters, digits and underscores.
fn word<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (one_of(is_word_start), take_while(0.., is_word_char))
        .take()
        .parse_next(input)
}

/// Keyword or identifier.
fn parse_word(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    word.map(|text| {
        Keyword::from_word(text)
            .map_or_else(|| TokenKind::Ident(text.to_owned()), TokenKind::Keyword)
    })
    .parse_next(input)
}

fn parse_variable(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    preceded('?', word)
        .map(|name| TokenKind::Variable(name.to_owned()))
        .parse_next(input)
}

/// Single- or double-quoted string; there are no escapes.
fn parse_string(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        delimited('\'', take_till(0.., '\''), '\''),
        delimited('"', take_till(0.., '"'), '"'),
    ))
    .map(|content: &str| TokenKind::String(content.to_owned()))
    .parse_next(input)
}

/// `[-+]?\d*\.?\d+([eE][-+]?\d+)?`, kept as written.
fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    (
        opt(one_of(['-', '+'])),
        alt(((digit0, '.', digit1).void(), digit1.void())),
        // An `e` without digits after it is left for the next token.
        opt((one_of(['e', 'E']), opt(one_of(['-', '+'])), digit1)),
    )
        .take()
        .map(|text: &str| TokenKind::Number(text.to_owned()))
        .parse_next(input)
}

fn parse_operator(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        "<>",
        "<=",
        ">=",
        "!=",
        one_of(['<', '>', '-', '+', '/', '%', '=', '|']).take(),
    ))
    .map(|op: &str| TokenKind::Operator(op.to_owned()))
    .parse_next(input)
}

fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c| match c {
        ',' => Some(TokenKind::Comma),
        '.' => Some(TokenKind::Dot),
        '*' => Some(TokenKind::Star),
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        _ => None,
    })
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_simple_query() {
        assert_eq!(
            kinds("SELECT ?x WHERE { ?x 'Likes' \"Banana\" }"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Variable("x".to_owned()),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::LBrace,
                TokenKind::Variable("x".to_owned()),
                TokenKind::String("Likes".to_owned()),
                TokenKind::String("Banana".to_owned()),
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            kinds("select Where"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_quoted_keyword_is_a_string() {
        assert_eq!(
            kinds("'WHERE'"),
            vec![TokenKind::String("WHERE".to_owned()), TokenKind::Eof]
        );
    }

    #[test]
    fn test_identifier_and_numbers() {
        assert_eq!(
            kinds("limit 10 -2.5 3e4 name_1"),
            vec![
                TokenKind::Keyword(Keyword::Limit),
                TokenKind::Number("10".to_owned()),
                TokenKind::Number("-2.5".to_owned()),
                TokenKind::Number("3e4".to_owned()),
                TokenKind::Ident("name_1".to_owned()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("<> <= = , ."),
            vec![
                TokenKind::Operator("<>".to_owned()),
                TokenKind::Operator("<=".to_owned()),
                TokenKind::Operator("=".to_owned()),
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("SELECT  ?x").unwrap();
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 8);
        assert_eq!(tokens[2].offset, 10);
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("SELECT ?x WHERE { ?x 'Likes }").unwrap_err();
        assert_eq!(err.offset, 21);
        assert!(err.message.contains("unterminated"));
    }

    #[test]
    fn test_bare_question_mark() {
        assert!(tokenize("SELECT ? WHERE").is_err());
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("SELECT #x").unwrap_err();
        assert_eq!(err.offset, 7);
    }

    #[test]
    fn test_sign_without_digits_is_an_operator() {
        assert_eq!(
            kinds("- +."),
            vec![
                TokenKind::Operator("-".to_owned()),
                TokenKind::Operator("+".to_owned()),
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_exponent_needs_digits() {
        assert_eq!(
            kinds("3ex .5"),
            vec![
                TokenKind::Number("3".to_owned()),
                TokenKind::Ident("ex".to_owned()),
                TokenKind::Number(".5".to_owned()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unicode_whitespace_is_skipped() {
        let tokens = tokenize("SELECT\u{3000}?x").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Variable("x".to_owned()));
        assert_eq!(tokens[1].offset, 9);
        assert_eq!(tokens[2].offset, 11);
    }

    #[test]
    fn test_lex_error_messages() {
        let err = tokenize("?é").unwrap_err();
        assert_eq!(err.offset, 0);
        assert!(err.message.contains("variable name"));

        let err = tokenize("?x != ! 1").unwrap_err();
        assert_eq!(err.offset, 6);
        assert_eq!(err.message, "unexpected character '!'");

        let err = tokenize("café").unwrap_err();
        assert_eq!(err.offset, 3);
        assert_eq!(err.message, "unexpected character 'é'");
    }

    #[test]
    fn test_string_with_spaces_and_unicode() {
        assert_eq!(
            kinds("\"New York\" 'café'"),
            vec![
                TokenKind::String("New York".to_owned()),
                TokenKind::String("café".to_owned()),
                TokenKind::Eof,
            ]
        );
    }
}
