//! Test loading a data file, querying it and rendering the table.

use std::io::Write;

use crate::e2e_tests::helpers::*;
use crate::loader::{DataFormat, load_hexastore};
use crate::presentation::{DEFAULT_CELL_WIDTH, present_result_grid};

const FRUIT_JSON: &str = r#"{"triples": [
    {"subject": "Apple", "prop": "Likes", "object": "Cow"},
    {"subject": "Apple", "prop": "Likes", "object": "Banana"},
    {"subject": "Apple", "prop": "Likes", "object": "Apple"},
    {"subject": "Cow", "prop": "Dislikes", "object": "Banana"},
    {"subject": "Banana", "prop": "Dislikes", "object": "Cow"},
    {"subject": "Cow", "prop": "Likes", "object": "Apple"}
]}"#;

fn temp_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_json_file_to_table() {
    let file = temp_file(".json", FRUIT_JSON);
    let store = load_hexastore(file.path(), None).unwrap();

    let result = select(&store, "SELECT ?x WHERE { ?x 'Likes' 'Banana' }");
    let table = present_result_grid(&result.to_grid(), DEFAULT_CELL_WIDTH);

    let expected = format!(
        "?x{} | \n{}\nApple{} | \n",
        " ".repeat(28),
        "-".repeat(32),
        " ".repeat(25)
    );
    assert_eq!(table, expected);
}

#[test]
fn test_loaded_store_matches_fixture() {
    let file = temp_file(".json", FRUIT_JSON);
    let loaded = load_hexastore(file.path(), None).unwrap();
    let fixture = fruit_store();

    for text in [
        "SELECT ?x, ?y WHERE { ?x 'Dislikes' ?y }",
        "SELECT ?y, ?x WHERE { ?x 'Likes' ?y }",
        "SELECT ?p WHERE { 'Cow' ?p 'Apple' }",
    ] {
        assert_eq!(
            sorted_rows(&select(&loaded, text)),
            sorted_rows(&select(&fixture, text)),
            "{text}"
        );
    }
}

#[test]
fn test_turtle_file_query() {
    let turtle = r#"
        @prefix ex: <http://example.org/> .
        ex:france ex:capital ex:paris .
        ex:germany ex:capital ex:berlin .
        ex:paris ex:name "Paris" .
    "#;
    let file = temp_file(".ttl", turtle);
    let store = load_hexastore(file.path(), Some(DataFormat::Turtle)).unwrap();

    let result = select(
        &store,
        "SELECT ?country WHERE { ?country 'http://example.org/capital' 'http://example.org/paris' }",
    );
    assert_eq!(sorted_rows(&result), rows(&[&["http://example.org/france"]]));

    let names = select(&store, "SELECT ?n WHERE { ?c 'http://example.org/name' ?n }");
    assert_eq!(sorted_rows(&names), rows(&[&["Paris"]]));
}

#[test]
fn test_long_terms_are_truncated_in_table() {
    let mut store = fruit_store();
    let long = "A".repeat(50);
    store.add(&long, "Likes", "Banana", "v");

    let result = select(&store, "SELECT ?x WHERE { ?x 'Likes' 'Banana' }");
    let table = present_result_grid(&result.to_grid(), 10);

    assert!(table.contains("AAAAAAAA.. | \n"));
    assert!(table.contains("Apple      | \n"));
}
