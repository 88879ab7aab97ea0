//! Metrics hooks for pair-sum searches
//!
//! Counts searches, hits, scanned elements and rejected requests. The
//! counters are atomics, so one recorder can be shared across threads.
//!
//! ## Usage
//!
//! ```
//! use dr_01_two_sum::metrics::Metrics;
//! use std::time::Duration;
//!
//! let metrics = Metrics::new();
//! metrics.record_search(4, true, Duration::from_nanos(250));
//! assert_eq!(metrics.snapshot().pairs_found, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for pair-sum searches
#[derive(Default)]
pub struct Metrics {
    /// Total searches run
    pub searches_performed: AtomicU64,
    /// Searches that found a pair
    pub pairs_found: AtomicU64,
    /// Total elements in searched sequences
    pub elements_scanned: AtomicU64,
    /// Requests rejected before searching
    pub requests_rejected: AtomicU64,
    /// Cumulative search time in nanoseconds
    pub search_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed search
    ///
    /// # Arguments
    /// * `elements` - Length of the searched sequence
    /// * `found` - Whether a pair was found
    /// * `duration` - Time taken by the scan
    pub fn record_search(&self, elements: usize, found: bool, duration: Duration) {
        self.searches_performed.fetch_add(1, Ordering::Relaxed);
        self.elements_scanned
            .fetch_add(elements as u64, Ordering::Relaxed);
        self.search_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.pairs_found.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a request rejected by validation
    pub fn record_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches_performed: self.searches_performed.load(Ordering::Relaxed),
            pairs_found: self.pairs_found.load(Ordering::Relaxed),
            elements_scanned: self.elements_scanned.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            avg_search_ns: self.avg_search_time_ns(),
        }
    }

    /// Calculate average search time in nanoseconds
    pub fn avg_search_time_ns(&self) -> u64 {
        let total = self.search_time_ns.load(Ordering::Relaxed);
        let count = self.searches_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Fraction of searches that found a pair
    pub fn hit_rate(&self) -> f64 {
        let total = self.searches_performed.load(Ordering::Relaxed);
        let found = self.pairs_found.load(Ordering::Relaxed);
        if total > 0 {
            found as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.searches_performed.store(0, Ordering::Relaxed);
        self.pairs_found.store(0, Ordering::Relaxed);
        self.elements_scanned.store(0, Ordering::Relaxed);
        self.requests_rejected.store(0, Ordering::Relaxed);
        self.search_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub searches_performed: u64,
    pub pairs_found: u64,
    pub elements_scanned: u64,
    pub requests_rejected: u64,
    pub avg_search_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    /// Record a completed search
    fn record_search(&self, elements: usize, found: bool, duration: Duration);

    /// Record a request rejected by validation
    fn record_rejected(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_search(&self, _: usize, _: bool, _: Duration) {}
    fn record_rejected(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_search(&self, elements: usize, found: bool, duration: Duration) {
        Metrics::record_search(self, elements, found, duration);
    }

    fn record_rejected(&self) {
        Metrics::record_rejected(self);
    }
}
