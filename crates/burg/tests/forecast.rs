//! Forecasting integration tests for arcast-burg.

use approx::assert_abs_diff_eq;
use arcast_burg::{BurgError, ForecastJob, Forecaster, forecast, forecast_many};

/// Yearly CPI % increase, 2002-2020.
const CPI: [f64; 19] = [
    3.30, 8.50, 7.50, 2.70, 4.50, 2.80, 4.60, 1.60, 1.0, 3.90, 3.60, 1.40, -0.1, -0.3, -0.5, 1.3,
    2.5, 2.7, 1.9,
];

#[test]
fn forecast_returns_requested_number_of_values() {
    let out = forecast(&CPI, 2, 5).unwrap();
    assert_eq!(out.len(), 5);
    assert!(out.iter().all(|v| v.is_finite()));
}

#[test]
fn each_refit_sees_a_longer_history() {
    let mut fc = Forecaster::new(&CPI, 2);
    let mut lengths = vec![fc.history().len()];
    for _ in 0..5 {
        fc.next().unwrap().unwrap();
        lengths.push(fc.history().len());
    }
    assert!(lengths.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn alternating_series_order_one() {
    let out = forecast(&[1.0, 2.0, 1.0, 2.0, 1.0], 1, 3).unwrap();
    assert_abs_diff_eq!(out[0], 0.8, epsilon = 1e-15);
    assert_abs_diff_eq!(out[1], 0.6506469500924216, epsilon = 1e-12);
    assert_abs_diff_eq!(out[2], 0.5342267644718095, epsilon = 1e-12);
}

#[test]
fn cpi_presets_regression() {
    let cases: [(usize, [f64; 3]); 4] = [
        (18, [1.5658953288071498, 4.528226300796376, 5.775294450751003]),
        (15, [1.7563162502397636, 3.739928556194263, 3.750929010465569]),
        (10, [0.2918568082935322, -0.30986413768107524, -0.21816511769368674]),
        (5, [1.305218331823127, 1.4028176653973166, 1.6344688308920357]),
    ];
    for (order, expected) in cases {
        let out = forecast(&CPI, order, 20).unwrap();
        assert_eq!(out.len(), 20);
        for (got, want) in out.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
    }
}

#[test]
fn invalid_order_aborts_without_partial_output() {
    let result = forecast(&CPI, CPI.len(), 5);
    assert!(matches!(
        result,
        Err(BurgError::InvalidOrder { order: 19, len: 19 })
    ));
}

#[test]
fn later_refit_failure_aborts_without_partial_output() {
    // The first fit succeeds and repeats the last value; appending it pushes
    // the error power of the second fit past f64::MAX.
    let history = [6e153, 6e153];

    let mut forecaster = Forecaster::new(&history, 1);
    assert_abs_diff_eq!(forecaster.next().unwrap().unwrap(), 6e153, epsilon = 1e140);
    assert_eq!(
        forecaster.next(),
        Some(Err(BurgError::DegenerateSignal { step: 0 }))
    );
    assert_eq!(forecaster.next(), None);
    assert_eq!(forecaster.history().len(), 3);

    assert_eq!(
        forecast(&history, 1, 3),
        Err(BurgError::DegenerateSignal { step: 0 })
    );
}

#[test]
fn parallel_batch_matches_sequential() {
    let jobs: Vec<ForecastJob> = [18, 15, 10, 5]
        .into_iter()
        .map(|order| ForecastJob::new(CPI.to_vec(), order, 20))
        .collect();
    let batch = forecast_many(&jobs);
    for (job, result) in jobs.iter().zip(batch) {
        let sequential = forecast(&job.samples, job.order, job.steps).unwrap();
        assert_eq!(result.unwrap(), sequential);
    }
}
