//! Cache Entry Module
//!
//! Defines a single cached value and the moment it was written.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::cache::expiry;

// == Cache Entry ==
/// Represents a single cache entry with its value and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V = Value> {
    /// The stored value, never interpreted by the store
    pub value: V,
    /// Time of insertion or last overwrite
    pub created_at: DateTime<Utc>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `created_at`.
    pub fn new(value: V, created_at: DateTime<Utc>) -> Self {
        Self { value, created_at }
    }

    // == Is Expired ==
    /// Checks the entry against the expiry policy for the given TTL.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        expiry::is_expired(self.created_at, ttl, now)
    }

    // == Overwrite ==
    /// Replaces the value in place and refreshes the timestamp.
    pub fn overwrite(&mut self, value: V, now: DateTime<Utc>) {
        self.value = value;
        self.created_at = now;
    }
}
