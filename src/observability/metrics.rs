//! Metrics registry
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by every collection route
///
/// Relaxed ordering throughout; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful list and get requests
    reads: AtomicU64,
    /// Records created
    created: AtomicU64,
    /// Records fully replaced
    replaced: AtomicU64,
    /// Records partially updated
    merged: AtomicU64,
    /// Records deleted
    deleted: AtomicU64,
    /// Requests naming an absent id
    not_found: AtomicU64,
    /// Requests rejected by decoding or validation
    rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment successful reads
    pub fn increment_reads(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment records created
    pub fn increment_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment records replaced
    pub fn increment_replaced(&self) {
        self.replaced.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment records merged
    pub fn increment_merged(&self) {
        self.merged.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment records deleted
    pub fn increment_deleted(&self) {
        self.deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment not-found responses
    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment rejected requests
    pub fn increment_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reads: self.reads.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            replaced: self.replaced.load(Ordering::Relaxed),
            merged: self.merged.load(Ordering::Relaxed),
            deleted: self.deleted.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub reads: u64,
    pub created: u64,
    pub replaced: u64,
    pub merged: u64,
    pub deleted: u64,
    pub not_found: u64,
    pub rejected: u64,
}

impl MetricsSnapshot {
    /// Total successful writes of any kind
    pub fn writes(&self) -> u64 {
        self.created + self.replaced + self.merged + self.deleted
    }
}
