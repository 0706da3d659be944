//! Error types for arcast-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the arcast-io crate.
///
/// Covers missing files, CSV and JSON format failures, column lookup, and
/// cells that do not parse as numbers.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error from JSON serialisation.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serialisation failure.
        reason: String,
    },

    /// Wraps a filesystem error.
    #[error("i/o error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the requested column is absent.
    #[error("column {column} not found")]
    MissingColumn {
        /// Column name or index as requested.
        column: String,
    },

    /// Returned when a cell cannot be parsed as a floating-point number.
    #[error("row {row}: cannot parse {value:?} as a number")]
    Parse {
        /// One-based row (line) of the offending cell.
        row: usize,
        /// Raw cell content.
        value: String,
    },

    /// Returned when no values were read.
    #[error("series is empty")]
    EmptySeries,

    /// Returned when a configuration check fails.
    #[error("invalid configuration: {details}")]
    Validation {
        /// Human-readable description of the failure.
        details: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}
