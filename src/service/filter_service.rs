//! Concurrency guard around the filter core.
//!
//! A single reader-writer lock protects the filter's mutable state:
//! `add`/`reset` take the write lock and serialize against everything else,
//! `check`/`stats` take the read lock and proceed in parallel with each
//! other. All guarded work is O(k) or O(m) with no I/O and no await points,
//! so one coarse lock is sufficient.

use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::domain::{BloomFilter, StatsSnapshot};
use crate::error::FilterError;
use crate::metrics::ServiceMetrics;

/// Thread-safe filter service shared across request handlers.
pub struct FilterService {
    filter: RwLock<BloomFilter>,
    metrics: ServiceMetrics,
}

impl FilterService {
    /// Construct the filter once with fixed parameters.
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        let filter = BloomFilter::new(expected_items, false_positive_rate)?;
        info!(
            m = filter.size_bits(),
            k = filter.hash_count(),
            expected_items,
            false_positive_rate,
            "filter created"
        );
        Ok(Self {
            filter: RwLock::new(filter),
            metrics: ServiceMetrics::new(),
        })
    }

    /// Add an item. Exclusive access: the entire k-bit write is atomic with
    /// respect to readers, so a concurrent check never observes a torn add.
    pub fn add(&self, item: &[u8]) -> Result<(), FilterError> {
        let start = Instant::now();
        {
            let mut filter = self.filter.write();
            filter.add(item)?;
        }
        self.metrics.record_insert(start.elapsed());
        debug!(item_len = item.len(), "item added");
        Ok(())
    }

    /// Test membership. Shared access.
    pub fn check(&self, item: &[u8]) -> Result<bool, FilterError> {
        let start = Instant::now();
        let found = self.filter.read().contains(item)?;
        self.metrics.record_lookup(start.elapsed(), found);
        debug!(item_len = item.len(), found, "membership checked");
        Ok(found)
    }

    /// Consistent snapshot of the filter's observable state. Shared access;
    /// all fields are derived under one read guard.
    pub fn stats(&self) -> StatsSnapshot {
        self.filter.read().snapshot()
    }

    /// Clear all state. Exclusive access.
    pub fn reset(&self) {
        {
            let mut filter = self.filter.write();
            filter.reset();
        }
        self.metrics.record_reset();
        info!("filter reset");
    }

    /// Operation counters for the `/metrics` endpoint.
    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_add_then_check() {
        let service = FilterService::new(1000, 0.01).unwrap();
        service.add(b"alpha").unwrap();
        assert!(service.check(b"alpha").unwrap());
        assert!(!service.check(b"never-added").unwrap());
    }

    #[test]
    fn test_stats_reflect_operations() {
        let service = FilterService::new(1000, 0.01).unwrap();
        service.add(b"one").unwrap();
        service.add(b"two").unwrap();

        let snap = service.stats();
        assert_eq!(snap.items_added, 2);
        assert!(snap.bits_set > 0);
        assert!(snap.bits_set <= 14, "at most 2 * k bits for two items");
    }

    #[test]
    fn test_reset_clears_everything() {
        let service = FilterService::new(1000, 0.01).unwrap();
        service.add(b"alpha").unwrap();
        service.reset();

        let snap = service.stats();
        assert_eq!(snap.items_added, 0);
        assert_eq!(snap.bits_set, 0);
        assert!(!service.check(b"alpha").unwrap());
    }

    #[test]
    fn test_metrics_track_operations() {
        let service = FilterService::new(1000, 0.01).unwrap();
        service.add(b"x").unwrap();
        service.check(b"x").unwrap();
        service.check(b"y").unwrap();
        service.reset();

        let snap = service.metrics().snapshot();
        assert_eq!(snap.inserts, 1);
        assert_eq!(snap.lookups, 2);
        assert_eq!(snap.lookups_positive, 1);
        assert_eq!(snap.resets, 1);
    }

    #[test]
    fn test_concurrent_adds_and_checks() {
        let service = Arc::new(FilterService::new(10_000, 0.01).unwrap());
        let writers: Vec<_> = (0..4)
            .map(|w| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    for i in 0..250 {
                        service.add(format!("w{}_{}", w, i).as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    for i in 0..250 {
                        // No assertion on the result; this exercises
                        // read/write interleaving without panics.
                        let _ = service.check(format!("w0_{}", i).as_bytes()).unwrap();
                        let _ = service.stats();
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }

        // Writes are serialized, so the counter accounts for every add
        assert_eq!(service.stats().items_added, 1000);
        for w in 0..4 {
            for i in 0..250 {
                assert!(service.check(format!("w{}_{}", w, i).as_bytes()).unwrap());
            }
        }
    }
}
