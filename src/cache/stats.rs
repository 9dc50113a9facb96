//! Cache Statistics Module
//!
//! Point-in-time snapshot of the cache's occupancy and eviction counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache counters.
///
/// Each field is read atomically, but the fields are not read together, so a
/// snapshot taken during concurrent writes may mix before and after values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Occupied slots across both tables
    pub size: usize,
    /// Forced evictions since construction
    pub evictions: u64,
    /// Slots per table
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    pub fn new(size: usize, evictions: u64, capacity: usize) -> Self {
        Self {
            size,
            evictions,
            capacity,
        }
    }

    /// Total slots across both tables.
    pub fn total_slots(&self) -> usize {
        self.capacity * 2
    }

    // == Load Factor ==
    /// Returns the fraction of occupied slots, or 0.0 for a zero-capacity snapshot.
    pub fn load_factor(&self) -> f64 {
        let total = self.total_slots();
        if total == 0 {
            0.0
        } else {
            self.size as f64 / total as f64
        }
    }
}
