//! Operation metrics for the filter service.
//!
//! Thread-safe counters and cumulative timers, cheap enough to record on
//! every request. Exposed as JSON at `/metrics`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Metrics collector for filter operations.
#[derive(Default)]
pub struct ServiceMetrics {
    /// Total add operations
    pub inserts: AtomicU64,
    /// Total lookup operations
    pub lookups: AtomicU64,
    /// Lookups that reported membership (true positives and false positives)
    pub lookups_positive: AtomicU64,
    /// Total reset operations
    pub resets: AtomicU64,
    /// Cumulative insert time in nanoseconds
    pub insert_time_ns: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&self, duration: Duration) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
        self.insert_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Average lookup latency in nanoseconds, 0 before the first lookup.
    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Average insert latency in nanoseconds, 0 before the first insert.
    pub fn avg_insert_time_ns(&self) -> u64 {
        let total = self.insert_time_ns.load(Ordering::Relaxed);
        let count = self.inserts.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Fraction of lookups that reported membership.
    ///
    /// Includes both true and false positives; it is an upper bound on the
    /// observed false-positive rate, not a measurement of it.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Point-in-time snapshot of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
            avg_insert_ns: self.avg_insert_time_ns(),
            avg_lookup_ns: self.avg_lookup_time_ns(),
        }
    }
}

/// Serializable view of [`ServiceMetrics`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub inserts: u64,
    pub lookups: u64,
    pub lookups_positive: u64,
    pub resets: u64,
    pub avg_insert_ns: u64,
    pub avg_lookup_ns: u64,
}
