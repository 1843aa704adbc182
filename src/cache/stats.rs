//! Cache Statistics Module
//!
//! Tracks runtime counters for lookups, expirations and rejected writes.

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of fetches that returned a live entry
    pub hits: u64,
    /// Number of fetches that found nothing (absent or expired)
    pub misses: u64,
    /// Number of entries removed because they expired (lazily or by sweep)
    pub expired: u64,
    /// Number of new-key writes refused by admission control
    pub overflows: u64,
    /// Current number of live entries
    pub live_entries: usize,
    /// Current number of collections
    pub collections: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no fetches have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expired(&mut self) {
        self.expired += 1;
    }

    pub fn record_overflow(&mut self) {
        self.overflows += 1;
    }
}
