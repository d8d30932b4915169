//! Digest engine mapping an item's bytes to a fixed-length SHA-256 digest.
//!
//! The digest is used purely as a source of uniformly distributed bits; no
//! other security property is relied upon.

use sha2::{Digest, Sha256};

/// Length of the item digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Compute the SHA-256 digest of an item's byte representation.
pub fn digest(item: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(item);
    hasher.finalize().into()
}
