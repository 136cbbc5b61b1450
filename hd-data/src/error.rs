/// Error types for loading and aggregating headache day observations
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn the input file into an observation table.
///
/// Always fatal: nothing downstream can be computed without the table.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The file is missing or could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes declared as UTF-8 were not
    #[error("Input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Structurally malformed CSV (e.g. a row with the wrong field count)
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one of the fixed column names
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A numeric cell could not be parsed
    #[error("Row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// A grouping key with no observations behind it.
///
/// Keys derived from the table can never trigger this; it guards
/// externally supplied key lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No observations for group '{key}'")]
pub struct EmptyGroupError {
    pub key: String,
}

impl EmptyGroupError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
