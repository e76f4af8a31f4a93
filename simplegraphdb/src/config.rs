//! Shell configuration module.
//!
//! Configuration is read from environment variables, with the data file
//! optionally given on the command line instead.
//!
//! # Environment Variables
//!
//! - `SIMPLEGRAPH_DATA_FILE`: Triple file to load (required unless a path is
//!   passed as the first argument, which takes precedence)
//! - `SIMPLEGRAPH_DATA_FORMAT`: `json`, `jsonl` or `turtle` (default: inferred
//!   from the file extension)
//! - `SIMPLEGRAPH_CELL_WIDTH`: Result table cell width (default: `30`)
//!
//! # Invariants
//!
//! - `cell_width` is always at least [`MIN_CELL_WIDTH`]

use std::path::PathBuf;

use crate::loader::DataFormat;
use crate::presentation::{DEFAULT_CELL_WIDTH, MIN_CELL_WIDTH};

const DATA_FILE_VAR: &str = "SIMPLEGRAPH_DATA_FILE";
const DATA_FORMAT_VAR: &str = "SIMPLEGRAPH_DATA_FORMAT";
const CELL_WIDTH_VAR: &str = "SIMPLEGRAPH_CELL_WIDTH";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Triple file loaded at startup.
    pub data_file: PathBuf,
    /// Explicit file format; `None` means infer from the extension.
    pub data_format: Option<DataFormat>,
    /// Width of each cell of the result table.
    pub cell_width: usize,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is missing.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(name) => {
                write!(f, "missing required environment variable: {name}")
            }
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no data file is given by `data_file_arg` or `SIMPLEGRAPH_DATA_FILE`
    /// - `SIMPLEGRAPH_DATA_FORMAT` names an unknown format
    /// - `SIMPLEGRAPH_CELL_WIDTH` is not a number of at least 3
    pub fn from_env(data_file_arg: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::from_lookup(data_file_arg, |name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(data_file_arg: Option<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = match data_file_arg {
            Some(path) => path,
            None => Self::load_data_file(&lookup)?,
        };
        let data_format = Self::load_data_format(&lookup)?;
        let cell_width = Self::load_cell_width(&lookup)?;

        Ok(Self {
            data_file,
            data_format,
            cell_width,
        })
    }

    fn load_data_file(lookup: impl Fn(&str) -> Option<String>) -> Result<PathBuf, ConfigError> {
        let path = lookup(DATA_FILE_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(DATA_FILE_VAR.to_owned()))?;

        if path.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: DATA_FILE_VAR.to_owned(),
                message: "must not be empty".to_owned(),
            });
        }

        Ok(PathBuf::from(path))
    }

    fn load_data_format(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<DataFormat>, ConfigError> {
        lookup(DATA_FORMAT_VAR)
            .map(|value| {
                value.parse::<DataFormat>().map_err(|_| ConfigError::InvalidValue {
                    name: DATA_FORMAT_VAR.to_owned(),
                    message: format!("'{value}' is not one of json, jsonl, turtle"),
                })
            })
            .transpose()
    }

    fn load_cell_width(lookup: impl Fn(&str) -> Option<String>) -> Result<usize, ConfigError> {
        let Some(value) = lookup(CELL_WIDTH_VAR) else {
            return Ok(DEFAULT_CELL_WIDTH);
        };
        match value.parse::<usize>() {
            Ok(width) if width >= MIN_CELL_WIDTH => Ok(width),
            _ => Err(ConfigError::InvalidValue {
                name: CELL_WIDTH_VAR.to_owned(),
                message: format!("'{value}' is not a width of at least {MIN_CELL_WIDTH}"),
            }),
        }
    }
}
