// Forbid unwrap() in production code to prevent panics on bad input.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
use std::path::PathBuf;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use simplegraphdb::config::Config;
use simplegraphdb::loader::load_hexastore;
use simplegraphdb::presentation::present_result_grid;
use simplegraphdb::{Hexastore, QueryError, run_query};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PROMPT: &str = "simplegraphdb> ";

fn main() {
    // Logs go to stderr so result tables on stdout stay clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simplegraphdb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_file_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match Config::from_env(data_file_arg) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: data_file={}, cell_width={}",
        config.data_file.display(),
        config.cell_width
    );

    let store = match load_hexastore(&config.data_file, config.data_format) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", config.data_file.display());
            std::process::exit(1);
        }
    };

    if let Err(e) = run_shell(&store, config.cell_width) {
        tracing::error!("Shell error: {e}");
        std::process::exit(1);
    }
}

/// What the shell does with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Empty,
    Quit,
    Query(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "" => Command::Empty,
        "quit" | "exit" => Command::Quit,
        text => Command::Query(text),
    }
}

/// Run `text` and render its rows as a table followed by a row count.
fn render_query(text: &str, store: &Hexastore, cell_width: usize) -> Result<String, QueryError> {
    let result = run_query(text, store)?;
    Ok(format!(
        "{}({} rows)\n",
        present_result_grid(&result.to_grid(), cell_width),
        result.len()
    ))
}

/// Read queries line by line until `quit`, `exit` or end of input.
///
/// A failing query prints its error and the session continues.
fn run_shell(store: &Hexastore, cell_width: usize) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };

        let text = match parse_command(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Query(text) => text,
        };
        if let Err(e) = editor.add_history_entry(text) {
            tracing::debug!("Failed to record history entry: {e}");
        }

        match render_query(text, store, cell_width) {
            Ok(table) => print!("{table}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Hexastore {
        let mut store = Hexastore::new();
        store.add("Apple", "Likes", "Cow", "v");
        store.add("Cow", "Likes", "Apple", "v");
        store
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command(" quit"), Command::Quit);
        assert_eq!(parse_command("exit\n"), Command::Quit);
        assert_eq!(
            parse_command("  SELECT * WHERE { ?s ?p ?o }  "),
            Command::Query("SELECT * WHERE { ?s ?p ?o }")
        );
    }

    #[test]
    fn test_render_query_ends_with_row_count() {
        let table =
            render_query("SELECT ?x WHERE { ?x 'Likes' 'Cow' }", &store(), 10).unwrap();

        assert!(table.starts_with("?x         | \n"));
        assert!(table.contains("Apple      | \n"));
        assert!(table.ends_with("(1 rows)\n"));
    }

    #[test]
    fn test_render_query_returns_error() {
        let err = render_query("SELECT WHERE", &store(), 10).unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));
    }
}
