//! # arcast-io
//!
//! Read a univariate series from CSV files or inline text, and write
//! estimation/forecast reports as JSON. Bridges external formats into the
//! `&[f64]` slice-based API of `arcast-burg`.

mod error;
mod reader;
mod report;
mod series;

pub use error::IoError;
pub use reader::{ColumnSelector, ReaderConfig, parse_values, read_series};
pub use report::{Report, write_report};
pub use series::Series;
