//! JSON output structures for estimation and forecast results.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Top-level report written by the `arcast` binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Name of the input series.
    pub series: String,
    /// AR order.
    pub order: usize,
    /// Number of observations the model was fitted on.
    pub n_obs: usize,
    /// AR coefficients `a_1..a_m`.
    pub coefficients: Vec<f64>,
    /// Reflection coefficient per recursion step.
    pub reflection: Vec<f64>,
    /// Error power after the last recursion step.
    pub error_power: f64,
    /// Forecast values, when a forecast was run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<f64>>,
}

impl Report {
    /// Attaches forecast values.
    pub fn with_forecast(mut self, forecast: Vec<f64>) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// Serialises the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Json`] if a value cannot be represented.
    pub fn to_json(&self) -> Result<String, IoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes `report` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Json`] on serialisation failure and [`IoError::Io`] if
/// the file cannot be written.
pub fn write_report(path: &Path, report: &Report) -> Result<(), IoError> {
    let json = report.to_json()?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            series: "cpi".into(),
            order: 1,
            n_obs: 5,
            coefficients: vec![-0.8],
            reflection: vec![-0.8],
            error_power: 4.32,
            forecast: None,
        }
    }

    #[test]
    fn forecast_omitted_when_absent() {
        let json = sample().to_json().unwrap();
        assert!(!json.contains("forecast"));
        assert!(json.contains("\"coefficients\""));
    }

    #[test]
    fn forecast_present_when_attached() {
        let json = sample().with_forecast(vec![0.8, 0.65]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["forecast"].as_array().unwrap().len(), 2);
        assert_eq!(value["order"], 1);
        assert_eq!(value["series"], "cpi");
    }
}
