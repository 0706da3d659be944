//! CSV series reader configuration and orchestration.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::series::Series;

// ---------------------------------------------------------------------------
// ColumnSelector
// ---------------------------------------------------------------------------

/// Which CSV column holds the series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Zero-based column index.
    Index(usize),
    /// Header name; requires `has_headers`.
    Name(String),
}

impl ColumnSelector {
    /// Interprets `s` as an index if it is an unsigned integer, otherwise as
    /// a header name.
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<usize>() {
            Ok(idx) => Self::Index(idx),
            Err(_) => Self::Name(s.trim().to_string()),
        }
    }
}

impl Default for ColumnSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "#{idx}"),
            Self::Name(name) => write!(f, "{name:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a single numeric column from a CSV file.
///
/// Use the builder methods (`with_*`) to customise the column, header row,
/// delimiter, and handling of empty cells.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Column holding the series.
    column: ColumnSelector,
    /// Whether the first row is a header.
    has_headers: bool,
    /// Field delimiter.
    delimiter: char,
    /// Skip empty cells instead of failing on them.
    skip_missing: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            column: ColumnSelector::default(),
            has_headers: true,
            delimiter: ',',
            skip_missing: false,
        }
    }
}

impl ReaderConfig {
    /// Set the column holding the series.
    pub fn with_column(mut self, column: ColumnSelector) -> Self {
        self.column = column;
        self
    }

    /// Set whether the first row is a header.
    pub fn with_has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip empty cells instead of failing on them.
    pub fn with_skip_missing(mut self, skip: bool) -> Self {
        self.skip_missing = skip;
        self
    }

    /// Returns the configured column.
    pub fn column(&self) -> &ColumnSelector {
        &self.column
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter is not a single ASCII
    /// character, or if a named column is requested without a header row.
    pub fn validate(&self) -> Result<(), IoError> {
        if !self.delimiter.is_ascii() {
            return Err(IoError::Validation {
                details: format!("delimiter must be ASCII, got {:?}", self.delimiter),
            });
        }
        if matches!(self.column, ColumnSelector::Name(_)) && !self.has_headers {
            return Err(IoError::Validation {
                details: format!("column {} is a name but has_headers is false", self.column),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// read_series
// ---------------------------------------------------------------------------

/// Read one numeric column of a CSV file as a [`Series`].
///
/// Quoted fields are unquoted and cells are trimmed before parsing. Rows
/// too short to contain the column are treated like empty cells.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::MissingColumn`] if the column is absent from the header,
/// [`IoError::Parse`] for a non-numeric (or, unless skipped, empty) cell,
/// and [`IoError::EmptySeries`] if no value was read.
pub fn read_series(path: &Path, config: &ReaderConfig) -> Result<Series, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter as u8)
        .flexible(true)
        .from_path(path)?;

    let (idx, name) = resolve_column(&mut reader, config)?;
    debug!(column = idx, name = %name, "resolved column");

    let mut values = Vec::new();
    let mut n_skipped = 0usize;

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = record.position().map_or(i + 1, |p| p.line() as usize);
        let cell = record.get(idx).map(str::trim).unwrap_or("");

        if cell.is_empty() {
            if config.skip_missing {
                n_skipped += 1;
                continue;
            }
            return Err(IoError::Parse {
                row,
                value: String::new(),
            });
        }

        let value = cell.parse::<f64>().map_err(|_| IoError::Parse {
            row,
            value: cell.to_string(),
        })?;
        values.push(value);
    }

    info!(
        path = %path.display(),
        n = values.len(),
        n_skipped,
        "series loaded"
    );

    Series::new(name, values)
}

/// Map the configured column to an index and a display name.
fn resolve_column<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    config: &ReaderConfig,
) -> Result<(usize, String), IoError> {
    let idx = match (&config.column, config.has_headers) {
        (ColumnSelector::Index(idx), false) => return Ok((*idx, format!("column_{idx}"))),
        (ColumnSelector::Index(idx), true) => *idx,
        (ColumnSelector::Name(name), _) => reader
            .headers()?
            .iter()
            .position(|h| h.trim() == name.as_str())
            .ok_or_else(|| IoError::MissingColumn {
                column: config.column.to_string(),
            })?,
    };

    match reader.headers()?.get(idx) {
        Some(h) => Ok((idx, h.trim().to_string())),
        None => Err(IoError::MissingColumn {
            column: config.column.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// parse_values
// ---------------------------------------------------------------------------

/// Parse an inline list of numbers separated by commas and/or whitespace.
///
/// ```
/// let v = arcast_io::parse_values("3.3, 8.5 7.5").unwrap();
/// assert_eq!(v, vec![3.3, 8.5, 7.5]);
/// ```
///
/// # Errors
///
/// Returns [`IoError::Parse`] (with `row` set to the one-based token
/// position) for a token that is not a number, and [`IoError::EmptySeries`]
/// if the text holds no tokens.
pub fn parse_values(text: &str) -> Result<Vec<f64>, IoError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| IoError::Parse {
                row: i + 1,
                value: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(IoError::EmptySeries);
    }
    Ok(values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.column, ColumnSelector::Index(0));
        assert!(cfg.has_headers);
        assert_eq!(cfg.delimiter, ',');
        assert!(!cfg.skip_missing);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReaderConfig::default()
            .with_column(ColumnSelector::Name("cpi".into()))
            .with_has_headers(true)
            .with_delimiter(';')
            .with_skip_missing(true);

        assert_eq!(cfg.column(), &ColumnSelector::Name("cpi".into()));
        assert_eq!(cfg.delimiter, ';');
        assert!(cfg.skip_missing);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_ascii_delimiter() {
        let err = ReaderConfig::default()
            .with_delimiter('§')
            .validate()
            .unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }

    #[test]
    fn validate_rejects_name_without_headers() {
        let err = ReaderConfig::default()
            .with_column(ColumnSelector::Name("value".into()))
            .with_has_headers(false)
            .validate()
            .unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }

    #[test]
    fn column_selector_parse() {
        assert_eq!(ColumnSelector::parse("2"), ColumnSelector::Index(2));
        assert_eq!(ColumnSelector::parse(" 0 "), ColumnSelector::Index(0));
        assert_eq!(
            ColumnSelector::parse("value"),
            ColumnSelector::Name("value".into())
        );
        assert_eq!(ColumnSelector::parse("-1"), ColumnSelector::Name("-1".into()));
    }

    #[test]
    fn column_selector_display() {
        assert_eq!(ColumnSelector::Index(3).to_string(), "#3");
        assert_eq!(ColumnSelector::Name("cpi".into()).to_string(), "\"cpi\"");
    }

    #[test]
    fn parse_values_mixed_separators() {
        let v = parse_values(" 3.30,8.50\n7.50\t-0.1 , 1e-2 ").unwrap();
        assert_eq!(v, vec![3.30, 8.50, 7.50, -0.1, 0.01]);
    }

    #[test]
    fn parse_values_rejects_garbage() {
        let err = parse_values("1.0, two, 3.0").unwrap_err();
        assert!(matches!(
            err,
            IoError::Parse { row: 2, ref value } if value == "two"
        ));
    }

    #[test]
    fn parse_values_empty() {
        assert!(matches!(
            parse_values(" , ,").unwrap_err(),
            IoError::EmptySeries
        ));
    }
}
