//! Burg lattice recursion over forward and backward prediction errors.

use tracing::trace;

use crate::error::BurgError;

/// Output of one full run of the recursion.
#[derive(Clone, Debug)]
pub(crate) struct Recursion {
    /// `A[1..=m]` of the prediction-error filter.
    pub(crate) coefficients: Vec<f64>,
    /// Reflection coefficient `mu` of every recursion step.
    pub(crate) reflection: Vec<f64>,
    /// Error power `D` after the last step.
    pub(crate) error_power: f64,
}

/// Checks the order bounds and sample finiteness before any indexing.
pub(crate) fn validate(samples: &[f64], order: usize) -> Result<(), BurgError> {
    if order == 0 || order >= samples.len() {
        return Err(BurgError::InvalidOrder {
            order,
            len: samples.len(),
        });
    }
    if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
        return Err(BurgError::NonFiniteData { index });
    }
    Ok(())
}

/// Runs the Burg recursion up to `order` on `x`.
///
/// Indices follow the lattice formulation with `N = x.len() - 1`. Both the
/// coefficient and the error updates are paired: each new value is computed
/// from the pre-update values of both partners before either is written.
pub(crate) fn run(x: &[f64], order: usize) -> Result<Recursion, BurgError> {
    validate(x, order)?;

    let n_last = x.len() - 1;

    let mut a = vec![0.0; order + 1];
    a[0] = 1.0;

    let mut f = x.to_vec();
    let mut b = x.to_vec();

    let mut d = 0.0;
    for v in &f {
        d += 2.0 * v * v;
    }
    d -= f[0] * f[0] + b[n_last] * b[n_last];
    // Rounding leaves a residue of a few ulps of the initial power when the
    // errors cancel exactly.
    let floor = d * (4.0 * f64::EPSILON);

    let mut reflection = Vec::with_capacity(order);

    for k in 0..order {
        // D is a sum of squared errors; anything not clearly above the
        // rounding floor means it has collapsed.
        if !(d.is_finite() && d > floor) {
            return Err(BurgError::DegenerateSignal { step: k });
        }

        let span = n_last - k;

        let mut mu = 0.0;
        for n in 0..span {
            mu += f[n + k + 1] * b[n];
        }
        mu *= -2.0 / d;

        for n in 0..=(k + 1) / 2 {
            let t1 = a[n] + mu * a[k + 1 - n];
            let t2 = a[k + 1 - n] + mu * a[n];
            a[n] = t1;
            a[k + 1 - n] = t2;
        }

        for n in 0..span {
            let t1 = f[n + k + 1] + mu * b[n];
            let t2 = b[n] + mu * f[n + k + 1];
            f[n + k + 1] = t1;
            b[n] = t2;
        }

        d = (1.0 - mu * mu) * d - f[k + 1] * f[k + 1] - b[span - 1] * b[span - 1];

        trace!(step = k, mu, error_power = d, "burg step");
        reflection.push(mu);
    }

    a.remove(0);

    Ok(Recursion {
        coefficients: a,
        reflection,
        error_power: d,
    })
}
