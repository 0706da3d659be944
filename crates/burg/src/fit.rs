//! Fitted AR model results.

use crate::error::BurgError;
use crate::spec::BurgSpec;

/// A fitted AR(m) model produced by [`BurgSpec::fit()`].
///
/// Coefficients follow the prediction-error filter convention
/// `x[n] + a_1 x[n-1] + ... + a_m x[n-m] ≈ 0`, so a one-step prediction is
/// `-Σ a_j x[n-j]`.
#[derive(Clone, Debug)]
pub struct BurgFit {
    spec: BurgSpec,
    coefficients: Vec<f64>,
    reflection: Vec<f64>,
    error_power: f64,
    n_obs: usize,
}

impl BurgFit {
    pub(crate) fn new(
        spec: BurgSpec,
        coefficients: Vec<f64>,
        reflection: Vec<f64>,
        error_power: f64,
        n_obs: usize,
    ) -> Self {
        Self {
            spec,
            coefficients,
            reflection,
            error_power,
            n_obs,
        }
    }

    /// Returns the [`BurgSpec`] that produced this fit.
    pub fn spec(&self) -> BurgSpec {
        self.spec
    }

    /// Returns the AR order.
    pub fn order(&self) -> usize {
        self.spec.order()
    }

    /// Returns the AR coefficients `a_1..a_m`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Consumes the fit and returns the coefficient vector.
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    /// Returns the reflection coefficient of each recursion step.
    pub fn reflection(&self) -> &[f64] {
        &self.reflection
    }

    /// Returns the combined forward and backward error power left after the
    /// last recursion step.
    pub fn error_power(&self) -> f64 {
        self.error_power
    }

    /// Returns the number of samples the model was fitted on.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Predicts the value following `history` from its last `order` samples.
    ///
    /// # Errors
    ///
    /// Returns [`BurgError::InsufficientHistory`] if `history` holds fewer
    /// than `order` samples.
    pub fn predict_next(&self, history: &[f64]) -> Result<f64, BurgError> {
        let order = self.order();
        if history.len() < order {
            return Err(BurgError::InsufficientHistory {
                order,
                len: history.len(),
            });
        }
        let mut prediction = 0.0;
        for (a, x) in self.coefficients.iter().zip(history.iter().rev()) {
            prediction += -a * x;
        }
        Ok(prediction)
    }
}
