//! Optimal filter parameter calculation.
//!
//! Formulas:
//! - m = ceil(-n * ln(p) / (ln 2)^2)  -- bits
//! - k = ceil(ln 2 * m / n)           -- hash functions
//!
//! Both quantities round up so that under-provisioning can never push the
//! effective false-positive rate above the configured target.

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Sizing parameters for a Bloom filter, immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterParameters {
    /// Number of bits in the filter (m)
    pub m: usize,
    /// Number of hash functions (k)
    pub k: usize,
}

impl FilterParameters {
    /// Derive (m, k) for an expected item count and target false-positive rate.
    ///
    /// Pure and deterministic. Fails with [`FilterError::InvalidParameters`]
    /// when `expected_items == 0` or the rate is outside (0, 1); no clamping
    /// is performed on the caller's behalf.
    pub fn for_capacity(
        expected_items: usize,
        false_positive_rate: f64,
    ) -> Result<Self, FilterError> {
        if expected_items == 0 || !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
            return Err(FilterError::InvalidParameters {
                expected_items,
                false_positive_rate,
            });
        }

        let n = expected_items as f64;
        let m = (-n * false_positive_rate.ln() / (LN_2 * LN_2)).ceil() as usize;
        let m = m.max(1);
        let k = (LN_2 * m as f64 / n).ceil() as usize;
        let k = k.max(1);

        Ok(Self { m, k })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario_n1000_p001() {
        // n=1000, p=0.01 must land on m=9586, k=7 with ceiling rounding
        let params = FilterParameters::for_capacity(1000, 0.01).unwrap();
        assert_eq!(params.m, 9586, "expected m=9586, got {}", params.m);
        assert_eq!(params.k, 7, "expected k=7, got {}", params.k);
    }

    #[test]
    fn test_invariants_hold_for_small_inputs() {
        let params = FilterParameters::for_capacity(1, 0.5).unwrap();
        assert!(params.m >= 1);
        assert!(params.k >= 1);
    }

    #[test]
    fn test_rejects_zero_items() {
        let result = FilterParameters::for_capacity(0, 0.01);
        assert!(matches!(result, Err(FilterError::InvalidParameters { .. })));
    }

    #[test]
    fn test_rejects_rate_outside_unit_interval() {
        for rate in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            let result = FilterParameters::for_capacity(100, rate);
            assert!(
                matches!(result, Err(FilterError::InvalidParameters { .. })),
                "rate {} should be rejected",
                rate
            );
        }
    }

    #[test]
    fn test_more_items_need_more_bits() {
        let small = FilterParameters::for_capacity(100, 0.01).unwrap();
        let large = FilterParameters::for_capacity(1000, 0.01).unwrap();
        assert!(large.m > small.m);
    }

    #[test]
    fn test_lower_rate_needs_more_bits() {
        let loose = FilterParameters::for_capacity(100, 0.1).unwrap();
        let tight = FilterParameters::for_capacity(100, 0.01).unwrap();
        assert!(tight.m > loose.m);
    }

    #[test]
    fn test_deterministic() {
        let a = FilterParameters::for_capacity(5000, 0.02).unwrap();
        let b = FilterParameters::for_capacity(5000, 0.02).unwrap();
        assert_eq!(a, b);
    }
}
