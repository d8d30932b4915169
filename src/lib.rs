#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # Bloomgate
//!
//! An HTTP membership service backed by a Bloom filter: answers "might this
//! item have been seen before?" with no false negatives and a tunable,
//! bounded false-positive rate, in memory sub-linear in the number of
//! distinct items.
//!
//! ## Architecture
//!
//! - **Domain layer** (`domain/`): pure filter logic, no I/O
//!   - [`FilterParameters`]: derives (m, k) from capacity and target rate
//!   - [`BitArray`]: the fixed-size bit store
//!   - [`BloomFilter`]: add/contains/reset over the bit store
//! - **Service layer** (`service/`): [`FilterService`], a reader-writer lock
//!   around the filter plus operation metrics
//! - **HTTP layer** (`http/`): axum router exposing add/check/stats/reset
//!
//! ## Usage
//!
//! ```ignore
//! use bloomgate::service::FilterService;
//!
//! let service = FilterService::new(10_000, 0.01)?;
//! service.add(b"alpha")?;
//! assert!(service.check(b"alpha")?);
//! ```
//!
//! The filter supports no deletion, no persistence and no resizing once its
//! parameters are fixed; `reset` is the only way to clear state.

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
pub mod service;

// Re-exports for convenience
pub use config::AppConfig;
pub use domain::{BitArray, BloomFilter, FilterParameters, StatsSnapshot};
pub use error::{ConfigError, FilterError};
pub use metrics::{MetricsSnapshot, ServiceMetrics};
pub use service::FilterService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
