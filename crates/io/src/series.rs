//! Named univariate series container.

use crate::error::IoError;

/// A named sequence of observations, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<f64>,
}

impl Series {
    /// Creates a new `Series`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::EmptySeries`] if `values` is empty.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Result<Self, IoError> {
        if values.is_empty() {
            return Err(IoError::EmptySeries);
        }
        Ok(Self {
            name: name.into(),
            values,
        })
    }

    /// Returns the series name (column header, or a positional label).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the observations.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the series and returns the observations.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
