//! Domain layer: pure filter logic, no I/O.

pub mod bits;
pub mod digest;
pub mod filter;
pub mod hashing;
pub mod parameters;

pub use bits::BitArray;
pub use filter::{BloomFilter, StatsSnapshot};
pub use parameters::FilterParameters;
