use std::path::PathBuf;

use serde::Deserialize;

/// Top-level arcast configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArcastConfig {
    /// Input settings.
    #[serde(default)]
    pub io: IoToml,

    /// Model settings.
    #[serde(default)]
    pub model: ModelToml,
}

/// Column given either as a header name or a zero-based index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColumnToml {
    Index(usize),
    Name(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub column: Option<ColumnToml>,
    #[serde(default = "default_true")]
    pub has_headers: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub skip_missing: bool,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            column: None,
            has_headers: true,
            delimiter: default_delimiter(),
            skip_missing: false,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default)]
    pub order: Option<usize>,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            order: None,
            steps: default_steps(),
        }
    }
}

fn default_steps() -> usize {
    crate::builtin::CPI_STEPS
}
