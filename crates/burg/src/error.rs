//! Error types for the arcast-burg crate.

/// Error type for all fallible operations in the arcast-burg crate.
///
/// Every variant is a deterministic input-validation failure: retrying the
/// same call with the same data yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BurgError {
    /// Returned when the model order is zero or not smaller than the
    /// number of samples.
    #[error("invalid model order {order} for {len} samples (need 1 <= order < len)")]
    InvalidOrder {
        /// Requested model order.
        order: usize,
        /// Number of samples provided.
        len: usize,
    },

    /// Returned when the error power collapses to zero mid-recursion, so the
    /// next reflection coefficient is undefined.
    #[error("degenerate signal: error power reached zero at recursion step {step}")]
    DegenerateSignal {
        /// Zero-based recursion step at which the collapse was detected.
        step: usize,
    },

    /// Returned when a sample is NaN or infinite.
    #[error("input data contains a non-finite value at index {index}")]
    NonFiniteData {
        /// Index of the first offending sample.
        index: usize,
    },

    /// Returned when a one-step prediction is requested from a history
    /// shorter than the model order.
    #[error("insufficient history: order {order} needs at least {order} samples, got {len}")]
    InsufficientHistory {
        /// Model order of the fit.
        order: usize,
        /// Number of samples in the supplied history.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_order() {
        let err = BurgError::InvalidOrder { order: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "invalid model order 3 for 2 samples (need 1 <= order < len)"
        );
    }

    #[test]
    fn error_degenerate_signal() {
        let err = BurgError::DegenerateSignal { step: 1 };
        assert_eq!(
            err.to_string(),
            "degenerate signal: error power reached zero at recursion step 1"
        );
    }

    #[test]
    fn error_non_finite_data() {
        let err = BurgError::NonFiniteData { index: 4 };
        assert_eq!(
            err.to_string(),
            "input data contains a non-finite value at index 4"
        );
    }

    #[test]
    fn error_insufficient_history() {
        let err = BurgError::InsufficientHistory { order: 3, len: 1 };
        assert_eq!(
            err.to_string(),
            "insufficient history: order 3 needs at least 3 samples, got 1"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<BurgError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<BurgError>();
    }
}
