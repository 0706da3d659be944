//! Iterative multi-step forecasting by repeated re-estimation.

use rayon::prelude::*;
use tracing::debug;

use crate::error::BurgError;
use crate::recursion;
use crate::spec::BurgSpec;

/// Yields one-step-ahead predictions, appending each to its own history.
///
/// Every call to [`Iterator::next`] refits the model on the full current
/// history and predicts the next value. The iterator never ends on its own;
/// bound it with [`Iterator::take`]. After an error it is exhausted.
///
/// # Example
///
/// ```
/// use arcast_burg::Forecaster;
///
/// let mut fc = Forecaster::new(&[1.0, 2.0, 1.0, 2.0, 1.0], 1);
/// let next = fc.next().unwrap().unwrap();
/// assert_eq!(fc.history().last(), Some(&next));
/// ```
#[derive(Clone, Debug)]
pub struct Forecaster {
    spec: BurgSpec,
    history: Vec<f64>,
    failed: bool,
}

impl Forecaster {
    /// Starts a forecast from a copy of `samples`.
    pub fn new(samples: &[f64], order: usize) -> Self {
        Self {
            spec: BurgSpec::new(order),
            history: samples.to_vec(),
            failed: false,
        }
    }

    /// Returns the observed samples followed by every prediction so far.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Returns the AR order used for every refit.
    pub fn order(&self) -> usize {
        self.spec.order()
    }

    fn step(&mut self) -> Result<f64, BurgError> {
        let fit = self.spec.fit(&self.history)?;
        let prediction = fit.predict_next(&self.history)?;
        debug!(n = self.history.len(), prediction, "appended one-step prediction");
        self.history.push(prediction);
        Ok(prediction)
    }
}

impl Iterator for Forecaster {
    type Item = Result<f64, BurgError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.step();
        self.failed = item.is_err();
        Some(item)
    }
}

/// Forecasts `steps` values past the end of `samples` with an AR(`order`)
/// model refitted before every step.
///
/// Returns only the new values. The order is validated against `samples`
/// up front, so `steps == 0` still rejects an invalid order.
///
/// # Errors
///
/// The first [`BurgError`] raised by any refit aborts the whole forecast.
#[tracing::instrument(skip(samples), fields(n = samples.len()))]
pub fn forecast(samples: &[f64], order: usize, steps: usize) -> Result<Vec<f64>, BurgError> {
    recursion::validate(samples, order)?;
    Forecaster::new(samples, order).take(steps).collect()
}

/// One independent forecast request for [`forecast_many`].
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastJob {
    /// Observed samples.
    pub samples: Vec<f64>,
    /// AR order.
    pub order: usize,
    /// Number of values to predict.
    pub steps: usize,
}

impl ForecastJob {
    /// Creates a job from owned samples.
    pub fn new(samples: Vec<f64>, order: usize, steps: usize) -> Self {
        Self {
            samples,
            order,
            steps,
        }
    }
}

/// Runs independent forecasts in parallel, one result per job, in job order.
pub fn forecast_many(jobs: &[ForecastJob]) -> Vec<Result<Vec<f64>, BurgError>> {
    jobs.par_iter()
        .map(|job| forecast(&job.samples, job.order, job.steps))
        .collect()
}
