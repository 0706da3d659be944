//! # arcast-burg
//!
//! Autoregressive (AR) coefficient estimation with the Burg lattice
//! recursion, and iterative multi-step forecasting built on top of it.
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["BurgSpec::new(order)"] -->|".fit(&data)?"| B["BurgFit"]
//!     B --> C[".coefficients() — a_1..a_m"]
//!     B --> D[".reflection() — mu per step"]
//!     B --> E[".error_power() — final D"]
//!     B --> F[".predict_next(&history)?"]
//!     G["Forecaster::new(&data, order)"] -->|"refit + predict per step"| B
//! ```
//!
//! ## Two Usage Paths
//!
//! **Plain functions**:
//! ```
//! let coeffs = arcast_burg::estimate(&[1.0, 2.0, 1.0, 2.0, 1.0], 1)?;
//! let next = arcast_burg::forecast(&[1.0, 2.0, 1.0, 2.0, 1.0], 1, 5)?;
//! assert_eq!(coeffs.len(), 1);
//! assert_eq!(next.len(), 5);
//! # Ok::<(), arcast_burg::BurgError>(())
//! ```
//!
//! **Typed fit**:
//! ```ignore
//! let fit = BurgSpec::new(5).fit(&data)?;
//! let y = fit.predict_next(&data)?;
//! ```
//!
//! ## Sign Convention
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | a_j | [`BurgFit::coefficients()`] | prediction-error filter taps, `x[n] ≈ -Σ a_j x[n-j]` |
//! | mu_k | [`BurgFit::reflection()`] | reflection coefficient of step k, `\|mu_k\| <= 1` |
//! | D | [`BurgFit::error_power()`] | forward + backward error power after the last step |

mod error;
mod fit;
mod forecast;
mod recursion;
mod spec;

pub use error::BurgError;
pub use fit::BurgFit;
pub use forecast::{ForecastJob, Forecaster, forecast, forecast_many};
pub use spec::BurgSpec;

/// Estimates `order` AR coefficients from `samples` with the Burg recursion.
///
/// Shorthand for `BurgSpec::new(order).fit(samples)` keeping only the
/// coefficients.
///
/// # Errors
///
/// See [`BurgSpec::fit()`].
pub fn estimate(samples: &[f64], order: usize) -> Result<Vec<f64>, BurgError> {
    BurgSpec::new(order)
        .fit(samples)
        .map(BurgFit::into_coefficients)
}
