//! Error types for the filter service.

use thiserror::Error;

/// Errors that can occur in the filter core.
///
/// `add`, `contains`, `reset` and `snapshot` are total over their input
/// domain; the only runtime variant (`IndexOutOfRange`) signals an internal
/// invariant violation and must never be observable from well-formed input.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(
        "invalid filter parameters: expected_items={expected_items}, \
         false_positive_rate={false_positive_rate} \
         (requires expected_items > 0 and rate in (0, 1))"
    )]
    InvalidParameters {
        expected_items: usize,
        false_positive_rate: f64,
    },

    #[error("bit index {index} out of range for filter of {size} bits")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Errors from configuration validation, reported at bootstrap.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("http port cannot be 0")]
    InvalidPort,

    #[error("expected_items cannot be 0")]
    ZeroCapacity,

    #[error("false_positive_rate {0} must be in (0, 1)")]
    InvalidRate(f64),
}
