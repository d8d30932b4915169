//! Hash derivation: expands one digest into k bit positions.
//!
//! Uses the two-hash combination technique: h(i) = h1 + i * h2, where h1 and
//! h2 are read from disjoint halves of a single SHA-256 digest. This derives
//! k pairwise-independent positions from one digest computation, and never
//! touches the digest bytes between derivations.

use super::digest::digest;

/// Compute k bit positions for an item, each in `[0, m)`.
///
/// Deterministic: the same item with the same (k, m) always yields the same
/// sequence. The k positions are not required to be distinct; repeats simply
/// set the same bit more than once. Requires `m > 0`.
pub fn indices(item: &[u8], k: usize, m: usize) -> Vec<usize> {
    debug_assert!(m > 0, "position range must be non-empty");

    let d = digest(item);
    let mut half = [0u8; 8];
    half.copy_from_slice(&d[..8]);
    let h1 = u64::from_be_bytes(half);
    half.copy_from_slice(&d[8..16]);
    let h2 = u64::from_be_bytes(half);

    (0..k as u64)
        .map(|i| {
            let combined = h1.wrapping_add(i.wrapping_mul(h2));
            (combined % m as u64) as usize
        })
        .collect()
}
