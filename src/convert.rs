//! Pure conversion functions: TOML config and CLI flags -> crate API types.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use arcast_burg::BurgFit;
use arcast_io::{ColumnSelector, ReaderConfig, Report, Series, parse_values, read_series};

use crate::cli::SourceArgs;
use crate::config::{ArcastConfig, ColumnToml, IoToml};

/// Loads the TOML config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ArcastConfig> {
    let Some(path) = path else {
        return Ok(ArcastConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Converts a TOML column into a `ColumnSelector`.
pub fn column_selector(column: &ColumnToml) -> ColumnSelector {
    match column {
        ColumnToml::Index(idx) => ColumnSelector::Index(*idx),
        ColumnToml::Name(name) => ColumnSelector::Name(name.clone()),
    }
}

/// Builds a `ReaderConfig` from `[io]`, with CLI flags taking precedence.
pub fn build_reader_config(io: &IoToml, args: &SourceArgs) -> ReaderConfig {
    let column = match (&args.column, &io.column) {
        (Some(s), _) => ColumnSelector::parse(s),
        (None, Some(c)) => column_selector(c),
        (None, None) => ColumnSelector::default(),
    };
    ReaderConfig::default()
        .with_column(column)
        .with_has_headers(io.has_headers && !args.no_headers)
        .with_delimiter(args.delimiter.unwrap_or(io.delimiter))
        .with_skip_missing(io.skip_missing)
}

/// Resolves the input series: `--values`, then `--input`, then `[io].input`.
pub fn resolve_series(args: &SourceArgs, config: &ArcastConfig) -> Result<Series> {
    if let Some(text) = &args.values {
        let values = parse_values(text).context("failed to parse --values")?;
        return Ok(Series::new("values", values)?);
    }

    let input = args
        .input
        .as_ref()
        .or(config.io.input.as_ref())
        .ok_or_else(|| {
            anyhow!("no input series: pass --values or --input, or set [io].input in config")
        })?;

    let reader_cfg = build_reader_config(&config.io, args);
    read_series(input, &reader_cfg)
        .with_context(|| format!("failed to read series: {}", input.display()))
}

/// Builds the JSON report for a fitted model.
pub fn build_report(series: &str, fit: &BurgFit) -> Report {
    Report {
        series: series.to_string(),
        order: fit.order(),
        n_obs: fit.n_obs(),
        coefficients: fit.coefficients().to_vec(),
        reflection: fit.reflection().to_vec(),
        error_power: fit.error_power(),
        forecast: None,
    }
}

/// Formats values as a comma-separated line.
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
