//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, Entry};

/// Response body for fetch, store and remove.
///
/// Echoes the target alongside the value and its creation time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub collection: String,
    pub key: String,
    pub value: Value,
    pub created_at: DateTime<Utc>,
}

impl EntryResponse {
    /// Creates a new EntryResponse from a store entry
    pub fn new(collection: impl Into<String>, key: impl Into<String>, entry: Entry) -> Self {
        Self {
            collection: collection.into(),
            key: key.into(),
            value: entry.value,
            created_at: entry.created_at,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed on expiry
    pub expired: u64,
    /// Number of writes refused for capacity
    pub overflows: u64,
    /// Current number of live entries
    pub live_entries: usize,
    /// Configured live-entry ceiling
    pub capacity: usize,
    /// Number of collections
    pub collections: usize,
    /// Configured time-to-live in seconds
    pub ttl_secs: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, capacity: usize, ttl_secs: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            overflows: stats.overflows,
            live_entries: stats.live_entries,
            capacity,
            collections: stats.collections,
            ttl_secs,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub err: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(err: impl Into<String>) -> Self {
        Self { err: err.into() }
    }
}
