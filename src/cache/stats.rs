//! Cell Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cell Stats ==
/// Tracks cache performance metrics for a single cell.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CellStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (empty slot, key mismatch, or expired)
    pub misses: u64,
    /// Number of entries displaced by a store under a different key
    pub evictions: u64,
}

impl CellStats {
    // == Constructor ==
    /// Creates a new CellStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
