//! Fixed-size bit store backing the filter.

use bitvec::prelude::*;

use crate::error::FilterError;

/// An index-addressable array of boolean flags with a fixed length.
///
/// Out-of-range access is a programming error on the caller's side and
/// surfaces as [`FilterError::IndexOutOfRange`]; given the hash derivation
/// contract it must never occur at runtime.
#[derive(Clone, Debug)]
pub struct BitArray {
    bits: BitVec<u8, Lsb0>,
}

impl BitArray {
    /// Create an all-false array of `len` bits.
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Read the bit at `index`.
    pub fn get(&self, index: usize) -> Result<bool, FilterError> {
        self.bits
            .get(index)
            .map(|bit| *bit)
            .ok_or(FilterError::IndexOutOfRange {
                index,
                size: self.bits.len(),
            })
    }

    /// Set the bit at `index`. Setting an already-set bit is a no-op.
    pub fn set(&mut self, index: usize) -> Result<(), FilterError> {
        let size = self.bits.len();
        let mut bit = self
            .bits
            .get_mut(index)
            .ok_or(FilterError::IndexOutOfRange { index, size })?;
        *bit = true;
        Ok(())
    }

    /// Reset every bit to false. O(len).
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Count of bits currently set. O(len).
    pub fn count_set(&self) -> usize {
        self.bits.count_ones()
    }
}
