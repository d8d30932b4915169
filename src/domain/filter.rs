//! Core Bloom filter implementation.
//!
//! INVARIANTS:
//! - No false negatives: once added, `contains()` returns true until a reset.
//! - The bit array keeps length m for the lifetime of the structure; bits are
//!   only cleared by an explicit `reset()`.

use serde::{Deserialize, Serialize};

use super::bits::BitArray;
use super::hashing::indices;
use super::parameters::FilterParameters;
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing.
///
/// Answers "might this item have been seen before?" with no false negatives
/// and a bounded false-positive rate. The structure exclusively owns its bit
/// storage and counter; all mutation goes through [`add`](Self::add) and
/// [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct BloomFilter {
    params: FilterParameters,
    bits: BitArray,
    /// Count of add invocations, duplicates included. Not a distinct count.
    items_added: u64,
}

impl BloomFilter {
    /// Create a filter sized for `expected_items` at the target rate.
    ///
    /// Parameters are fixed for the lifetime of the filter; there is no
    /// resizing. Fails with [`FilterError::InvalidParameters`] on invalid
    /// input, producing no partial structure.
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        let params = FilterParameters::for_capacity(expected_items, false_positive_rate)?;
        Ok(Self {
            bits: BitArray::new(params.m),
            params,
            items_added: 0,
        })
    }

    /// Add an item to the filter.
    ///
    /// Sets the k derived bits (repeats among them are harmless) and then
    /// increments the add counter. An error here signals an internal defect
    /// in hash derivation, never a property of the input.
    pub fn add(&mut self, item: &[u8]) -> Result<(), FilterError> {
        for index in indices(item, self.params.k, self.params.m) {
            self.bits.set(index)?;
        }
        self.items_added += 1;
        Ok(())
    }

    /// Test whether an item might be in the filter.
    ///
    /// Returns false only when the item was definitely never added; true may
    /// be a false positive with probability approaching the configured rate
    /// as the filter fills.
    pub fn contains(&self, item: &[u8]) -> Result<bool, FilterError> {
        for index in indices(item, self.params.k, self.params.m) {
            if !self.bits.get(index)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Clear all bits and zero the add counter.
    ///
    /// Irreversible: all prior membership information is destroyed.
    pub fn reset(&mut self) {
        self.bits.clear();
        self.items_added = 0;
    }

    /// Filter size in bits (m).
    pub fn size_bits(&self) -> usize {
        self.params.m
    }

    /// Number of hash functions (k).
    pub fn hash_count(&self) -> usize {
        self.params.k
    }

    /// Number of add invocations since construction or the last reset.
    pub fn items_added(&self) -> u64 {
        self.items_added
    }

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.count_set()
    }

    /// Observable metrics derived from the current state.
    ///
    /// `bits_set` and the ratios derived from it are computed from the same
    /// read of the bit array, so a snapshot is internally consistent.
    pub fn snapshot(&self) -> StatsSnapshot {
        let bits_set = self.bits.count_set();
        let fill_ratio = bits_set as f64 / self.params.m as f64;
        StatsSnapshot {
            size: self.params.m,
            hash_functions: self.params.k,
            items_added: self.items_added,
            bits_set,
            fill_ratio,
            estimated_false_positive_rate: fill_ratio.powi(self.params.k as i32),
        }
    }
}

/// Point-in-time view of the filter's observable state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub size: usize,
    pub hash_functions: usize,
    pub items_added: u64,
    pub bits_set: usize,
    pub fill_ratio: f64,
    pub estimated_false_positive_rate: f64,
}
