//! AR model specification (unfitted).

use crate::error::BurgError;
use crate::fit::BurgFit;
use crate::recursion;

/// An unfitted AR(m) model specification.
///
/// This is the entry point of the typestate workflow. Create a spec with
/// [`BurgSpec::new()`], then call [`BurgSpec::fit()`] to obtain a [`BurgFit`].
///
/// ```mermaid
/// graph LR
///     A["BurgSpec::new(order)"] -->|".fit(&data)?"| B["BurgFit"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BurgSpec {
    order: usize,
}

impl BurgSpec {
    /// Creates a new AR specification with `order` coefficients.
    ///
    /// # Example
    ///
    /// ```
    /// use arcast_burg::BurgSpec;
    ///
    /// let spec = BurgSpec::new(2);
    /// assert_eq!(spec.order(), 2);
    /// ```
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Returns the AR order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Fits this specification to `data` with the Burg recursion.
    ///
    /// Every call recomputes from scratch over the whole slice.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BurgError::InvalidOrder`] | `order == 0` or `order >= data.len()` |
    /// | [`BurgError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`BurgError::DegenerateSignal`] | the error power reaches zero before the last step |
    #[tracing::instrument(level = "debug", skip(data), fields(n = data.len()))]
    pub fn fit(&self, data: &[f64]) -> Result<BurgFit, BurgError> {
        let out = recursion::run(data, self.order)?;
        Ok(BurgFit::new(
            *self,
            out.coefficients,
            out.reflection,
            out.error_power,
            data.len(),
        ))
    }
}
