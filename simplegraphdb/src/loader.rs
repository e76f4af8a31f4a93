//! Bulk loading of triple files into a [`Hexastore`].
//!
//! Three formats are supported:
//!
//! - `json`: `{"triples": [{"subject": .., "prop": .., "object": ..}, ..]}`
//! - `jsonl`: one such record object per line; blank lines are skipped
//! - `turtle`: RDF Turtle, with IRIs kept as their IRI text, literals as their
//!   lexical value and blank nodes as `_:id`
//!
//! Loading is all or nothing: the first bad record fails the whole load and no
//! store is returned. Every loaded triple carries [`PLACEHOLDER_VALUE`].
//!
//! [`PLACEHOLDER_VALUE`]: crate::hexastore::PLACEHOLDER_VALUE

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rio_api::model::{Literal, Subject, Term};
use rio_api::parser::TriplesParser;
use rio_turtle::{TurtleError, TurtleParser};
use serde::Deserialize;

use crate::hexastore::Hexastore;
use crate::types::TripleRecord;

/// On-disk layout of a triple file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    JsonLines,
    Turtle,
}

impl DataFormat {
    /// Infer the format from a file extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::JsonLines),
            "ttl" | "turtle" => Some(Self::Turtle),
            _ => None,
        }
    }
}

impl FromStr for DataFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" | "json-lines" => Ok(Self::JsonLines),
            "ttl" | "turtle" => Ok(Self::Turtle),
            _ => Err(LoadError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::JsonLines => "jsonl",
            Self::Turtle => "turtle",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while loading a triple file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// A bulk JSON document is malformed.
    Json(serde_json::Error),
    /// A JSON-Lines record is malformed. Lines are numbered from 1.
    JsonLine {
        line: usize,
        source: serde_json::Error,
    },
    /// The Turtle document is malformed.
    Turtle(TurtleError),
    /// The format name or file extension is not recognised.
    UnknownFormat(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::JsonLine { line, source } => write!(f, "invalid JSON on line {line}: {source}"),
            Self::Turtle(e) => write!(f, "invalid Turtle: {e}"),
            Self::UnknownFormat(name) => write!(f, "unknown data format: {name}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) | Self::JsonLine { source: e, .. } => Some(e),
            Self::Turtle(e) => Some(e),
            Self::UnknownFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<TurtleError> for LoadError {
    fn from(e: TurtleError) -> Self {
        Self::Turtle(e)
    }
}

#[derive(Deserialize)]
struct TripleDocument {
    triples: Vec<TripleRecord>,
}

/// Read every record of a bulk JSON document.
pub fn read_json(reader: impl BufRead) -> Result<Vec<TripleRecord>, LoadError> {
    let document: TripleDocument = serde_json::from_reader(reader)?;
    Ok(document.triples)
}

/// Read one record per non-blank line.
pub fn read_json_lines(reader: impl BufRead) -> Result<Vec<TripleRecord>, LoadError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: TripleRecord =
            serde_json::from_str(&line).map_err(|source| LoadError::JsonLine {
                line: index + 1,
                source,
            })?;
        records.push(record);
    }
    Ok(records)
}

/// Read every triple of a Turtle document.
pub fn read_turtle(reader: impl BufRead) -> Result<Vec<TripleRecord>, LoadError> {
    let mut records = Vec::new();
    TurtleParser::new(reader, None).parse_all(&mut |triple| -> Result<(), LoadError> {
        records.push(TripleRecord::new(
            subject_text(&triple.subject),
            triple.predicate.iri,
            term_text(&triple.object),
        ));
        Ok(())
    })?;
    Ok(records)
}

fn subject_text(subject: &Subject<'_>) -> String {
    match subject {
        Subject::NamedNode(node) => node.iri.to_owned(),
        other => other.to_string(),
    }
}

fn term_text(term: &Term<'_>) -> String {
    match term {
        Term::NamedNode(node) => node.iri.to_owned(),
        Term::Literal(
            Literal::Simple { value }
            | Literal::LanguageTaggedString { value, .. }
            | Literal::Typed { value, .. },
        ) => (*value).to_owned(),
        other => other.to_string(),
    }
}

/// Read records in `format` from `reader`.
pub fn read_records(
    reader: impl BufRead,
    format: DataFormat,
) -> Result<Vec<TripleRecord>, LoadError> {
    match format {
        DataFormat::Json => read_json(reader),
        DataFormat::JsonLines => read_json_lines(reader),
        DataFormat::Turtle => read_turtle(reader),
    }
}

/// Load the triple file at `path` into a fresh store.
///
/// `format` overrides the extension-based guess.
pub fn load_hexastore(path: &Path, format: Option<DataFormat>) -> Result<Hexastore, LoadError> {
    let format = match format {
        Some(format) => format,
        None => DataFormat::from_path(path)
            .ok_or_else(|| LoadError::UnknownFormat(path.display().to_string()))?,
    };
    tracing::info!("Loading {} as {format}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let records = read_records(reader, format)?;
    Ok(Hexastore::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::hexastore::PLACEHOLDER_VALUE;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DataFormat::from_path(Path::new("db.json")),
            Some(DataFormat::Json)
        );
        assert_eq!(
            DataFormat::from_path(Path::new("db.NDJSON")),
            Some(DataFormat::JsonLines)
        );
        assert_eq!(
            DataFormat::from_path(Path::new("countries.ttl")),
            Some(DataFormat::Turtle)
        );
        assert_eq!(DataFormat::from_path(Path::new("db.csv")), None);
        assert_eq!(DataFormat::from_path(Path::new("db")), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("Turtle".parse::<DataFormat>().unwrap(), DataFormat::Turtle);
        assert!(matches!(
            "xml".parse::<DataFormat>(),
            Err(LoadError::UnknownFormat(name)) if name == "xml"
        ));
    }

    #[test]
    fn test_read_json() {
        let json = r#"{"triples": [
            {"subject": "Apple", "prop": "Likes", "object": "Cow"},
            {"subject": "Cow", "prop": "Likes", "object": "Apple"}
        ]}"#;
        let records = read_json(json.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                TripleRecord::new("Apple", "Likes", "Cow"),
                TripleRecord::new("Cow", "Likes", "Apple"),
            ]
        );
    }

    #[test]
    fn test_read_json_rejects_missing_field() {
        let json = r#"{"triples": [{"subject": "Apple", "object": "Cow"}]}"#;
        assert!(matches!(read_json(json.as_bytes()), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_read_json_lines_skips_blank_lines() {
        let text = "{\"subject\":\"a\",\"prop\":\"p\",\"object\":\"b\"}\n\n  \n\
                    {\"subject\":\"b\",\"prop\":\"p\",\"object\":\"c\"}\n";
        let records = read_json_lines(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_read_json_lines_reports_line_number() {
        let text = "{\"subject\":\"a\",\"prop\":\"p\",\"object\":\"b\"}\n\nnot json\n";
        let err = read_json_lines(text.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::JsonLine { line: 3, .. }));
        assert!(err.to_string().starts_with("invalid JSON on line 3"));
    }

    #[test]
    fn test_read_turtle_term_mapping() {
        let turtle = r#"
            @prefix ex: <http://example.org/> .
            ex:france ex:capital ex:paris ;
                      ex:name "France"@en ;
                      ex:population "67000000"^^<http://www.w3.org/2001/XMLSchema#integer> .
            _:b1 ex:borders ex:france .
        "#;
        let records = read_turtle(turtle.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                TripleRecord::new(
                    "http://example.org/france",
                    "http://example.org/capital",
                    "http://example.org/paris"
                ),
                TripleRecord::new(
                    "http://example.org/france",
                    "http://example.org/name",
                    "France"
                ),
                TripleRecord::new(
                    "http://example.org/france",
                    "http://example.org/population",
                    "67000000"
                ),
                TripleRecord::new(
                    "_:b1",
                    "http://example.org/borders",
                    "http://example.org/france"
                ),
            ]
        );
    }

    #[test]
    fn test_read_turtle_rejects_garbage() {
        let err = read_turtle("<a> <b> .".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Turtle(_)));
    }

    #[test]
    fn test_load_hexastore_from_json_file() {
        let file = write_temp(
            ".json",
            r#"{"triples": [{"subject": "Apple", "prop": "Likes", "object": "Banana"}]}"#,
        );
        let store = load_hexastore(file.path(), None).unwrap();

        assert_eq!(store.len(), 1);
        let apple = store.entity_id("Apple").unwrap();
        let likes = store.predicate_id("Likes").unwrap();
        let banana = store.entity_id("Banana").unwrap();
        assert_eq!(
            store.query_spo(apple, likes, banana)[0].value,
            PLACEHOLDER_VALUE
        );
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let file = write_temp(".txt", "{\"subject\":\"a\",\"prop\":\"p\",\"object\":\"b\"}\n");

        assert!(matches!(
            load_hexastore(file.path(), None),
            Err(LoadError::UnknownFormat(_))
        ));
        let store = load_hexastore(file.path(), Some(DataFormat::JsonLines)).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_hexastore(&dir.path().join("absent.json"), None).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
