//! Cache Store Module
//!
//! Two-level collection -> key -> entry storage with TTL expiration and a
//! hard ceiling on live entries.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::cache::{CacheStats, Entry};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Main cache storage.
///
/// Not synchronized on its own; callers share it behind a single exclusive
/// lock (see [`crate::cache::SharedCache`]).
///
/// `live` always equals the number of entries across all collections. It is
/// only decremented when an entry is physically removed, so an expired entry
/// that nobody has visited yet still counts against `capacity`.
#[derive(Debug)]
pub struct CacheStore<V = Value> {
    /// Collection name -> key -> entry
    collections: HashMap<String, HashMap<String, Entry<V>>>,
    /// Live-entry counter used for admission control
    live: usize,
    /// Maximum number of live entries
    capacity: usize,
    /// Process-wide time-to-live
    ttl: Duration,
    /// Runtime statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of live entries
    /// * `ttl` - Age after which an entry is expired
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            collections: HashMap::new(),
            live: 0,
            capacity,
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Fetch ==
    /// Returns a copy of the live entry stored under (collection, key).
    ///
    /// An expired entry is removed on the spot and reported as not found.
    /// Fetching never refreshes the timestamp.
    pub fn fetch(&mut self, collection: &str, key: &str) -> Result<Entry<V>> {
        self.fetch_at(collection, key, Utc::now())
    }

    /// [`fetch`](Self::fetch) evaluated at an explicit `now`.
    pub fn fetch_at(&mut self, collection: &str, key: &str, now: DateTime<Utc>) -> Result<Entry<V>> {
        let Some(entries) = self.collections.get_mut(collection) else {
            self.stats.record_miss();
            return Err(CacheError::not_found(collection, key));
        };

        let expired = match entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl, now),
            None => {
                self.stats.record_miss();
                return Err(CacheError::not_found(collection, key));
            }
        };

        if expired {
            entries.remove(key);
            self.live -= 1;
            self.stats.record_expired();
            self.stats.record_miss();
            return Err(CacheError::not_found(collection, key));
        }

        self.stats.record_hit();
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::not_found(collection, key))
    }

    // == Store ==
    /// Inserts or overwrites the entry under (collection, key).
    ///
    /// A new key is refused with [`CacheError::Overflow`] once the live
    /// counter has reached capacity; nothing is mutated in that case.
    /// Overwrites are always accepted, leave the counter untouched and do not
    /// look at the previous entry's expiry.
    pub fn store(&mut self, collection: &str, key: &str, value: V) -> Result<Entry<V>> {
        self.store_at(collection, key, value, Utc::now())
    }

    /// [`store`](Self::store) evaluated at an explicit `now`.
    pub fn store_at(
        &mut self,
        collection: &str,
        key: &str,
        value: V,
        now: DateTime<Utc>,
    ) -> Result<Entry<V>> {
        if let Some(existing) = self
            .collections
            .get_mut(collection)
            .and_then(|entries| entries.get_mut(key))
        {
            existing.overwrite(value, now);
            return Ok(existing.clone());
        }

        if self.live >= self.capacity {
            self.stats.record_overflow();
            return Err(CacheError::Overflow);
        }

        let entry = Entry::new(value, now);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), entry.clone());
        self.live += 1;

        Ok(entry)
    }

    // == Remove ==
    /// Deletes the entry under (collection, key) whether or not it expired.
    pub fn remove(&mut self, collection: &str, key: &str) -> Result<Entry<V>> {
        let removed = self
            .collections
            .get_mut(collection)
            .and_then(|entries| entries.remove(key));

        match removed {
            Some(entry) => {
                self.live -= 1;
                Ok(entry)
            }
            None => Err(CacheError::not_found(collection, key)),
        }
    }

    // == Evict If Expired ==
    /// Re-resolves (collection, key) and deletes it if expired at `now`.
    ///
    /// Returns `true` when an entry was removed. Missing collections or keys
    /// are not an error: a concurrent request may already have removed them.
    pub fn evict_if_expired(&mut self, collection: &str, key: &str, now: DateTime<Utc>) -> bool {
        let Some(entries) = self.collections.get_mut(collection) else {
            return false;
        };

        let expired = entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(self.ttl, now));
        if !expired {
            return false;
        }

        entries.remove(key);
        self.live -= 1;
        self.stats.record_expired();
        true
    }
}

impl<V> CacheStore<V> {
    // == Snapshots ==
    /// Returns the names of all known collections.
    pub fn collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    /// Returns the keys currently held by `collection` (empty if unknown).
    pub fn collection_keys(&self, collection: &str) -> Vec<String> {
        self.collections
            .get(collection)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    // == Accessors ==
    /// Returns the live-entry counter.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Returns the number of collections ever written to.
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.live_entries = self.live;
        stats.collections = self.collections.len();
        stats
    }

    /// Counts entries by walking every collection.
    #[cfg(test)]
    pub(crate) fn counted_entries(&self) -> usize {
        self.collections.values().map(HashMap::len).sum()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HOUR: Duration = Duration::from_secs(3600);

    fn hours(n: i64) -> chrono::Duration {
        chrono::Duration::hours(n)
    }

    #[test]
    fn test_store_new() {
        let store: CacheStore = CacheStore::new(100, HOUR);
        assert_eq!(store.live_count(), 0);
        assert_eq!(store.collection_count(), 0);
        assert_eq!(store.capacity(), 100);
        assert_eq!(store.ttl(), HOUR);
    }

    #[test]
    fn test_store_and_fetch() {
        let mut store = CacheStore::new(100, HOUR);

        let stored = store.store("users", "gobi", json!({"name": "gobi"})).unwrap();
        let fetched = store.fetch("users", "gobi").unwrap();

        assert_eq!(fetched, stored);
        assert_eq!(fetched.value, json!({"name": "gobi"}));
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn test_fetch_unknown_collection() {
        let mut store: CacheStore = CacheStore::new(100, HOUR);

        let result = store.fetch("nope", "key");
        assert!(matches!(result, Err(CacheError::NotFound { .. })));
    }

    #[test]
    fn test_fetch_unknown_key() {
        let mut store = CacheStore::new(100, HOUR);
        store.store("c", "a", json!(1)).unwrap();

        let result = store.fetch("c", "b");
        assert!(matches!(result, Err(CacheError::NotFound { .. })));
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn test_fetch_does_not_refresh_timestamp() {
        let t0 = Utc::now();
        let mut store = CacheStore::new(100, HOUR);
        store.store_at("c", "a", json!(1), t0).unwrap();

        let fetched = store.fetch_at("c", "a", t0 + chrono::Duration::minutes(30)).unwrap();
        assert_eq!(fetched.created_at, t0);
        assert!(store.fetch_at("c", "a", t0 + hours(2)).is_err());
    }

    #[test]
    fn test_fetch_expired_is_lazily_deleted() {
        let t0 = Utc::now();
        let mut store = CacheStore::new(100, HOUR);
        store.store_at("c", "a", json!(1), t0).unwrap();
        store.store_at("c", "b", json!(2), t0).unwrap();

        let result = store.fetch_at("c", "a", t0 + hours(2));

        assert!(matches!(result, Err(CacheError::NotFound { .. })));
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.counted_entries(), 1);
        assert_eq!(store.stats().expired, 1);
    }

    #[test]
    fn test_fetch_at_ttl_boundary_is_live() {
        let t0 = Utc::now();
        let mut store = CacheStore::new(100, HOUR);
        store.store_at("c", "a", json!(1), t0).unwrap();

        assert!(store.fetch_at("c", "a", t0 + hours(1)).is_ok());
        assert!(store
            .fetch_at("c", "a", t0 + hours(1) + chrono::Duration::milliseconds(1))
            .is_err());
    }

    #[test]
    fn test_overwrite_keeps_counter() {
        let t0 = Utc::now();
        let later = t0 + chrono::Duration::minutes(10);
        let mut store = CacheStore::new(100, HOUR);

        store.store_at("c", "a", json!("v1"), t0).unwrap();
        let second = store.store_at("c", "a", json!("v2"), later).unwrap();

        assert_eq!(second.created_at, later);
        assert_eq!(store.fetch_at("c", "a", later).unwrap().value, json!("v2"));
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn test_overwrite_of_expired_entry_revives_it() {
        let t0 = Utc::now();
        let mut store = CacheStore::new(100, HOUR);
        store.store_at("c", "a", json!(1), t0).unwrap();

        let revived = store.store_at("c", "a", json!(2), t0 + hours(3)).unwrap();

        assert_eq!(revived.created_at, t0 + hours(3));
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.stats().expired, 0);
    }

    #[test]
    fn test_overflow_rejects_new_key_without_mutation() {
        let mut store = CacheStore::new(1, HOUR);
        store.store("c", "a", json!(1)).unwrap();

        let result = store.store("other", "b", json!(2));

        assert!(matches!(result, Err(CacheError::Overflow)));
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.collection_count(), 1);
        assert_eq!(store.stats().overflows, 1);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut store: CacheStore = CacheStore::new(0, HOUR);

        let result = store.store("c", "a", json!(1));
        assert!(matches!(result, Err(CacheError::Overflow)));
        assert_eq!(store.collection_count(), 0);
    }

    #[test]
    fn test_remove() {
        let mut store = CacheStore::new(100, HOUR);
        store.store("c", "a", json!({"x": 1})).unwrap();

        let removed = store.remove("c", "a").unwrap();

        assert_eq!(removed.value, json!({"x": 1}));
        assert_eq!(store.live_count(), 0);
        assert!(matches!(store.fetch("c", "a"), Err(CacheError::NotFound { .. })));
    }

    #[test]
    fn test_remove_expired_entry_still_succeeds() {
        let t0 = Utc::now() - hours(5);
        let mut store = CacheStore::new(100, HOUR);
        store.store_at("c", "a", json!(1), t0).unwrap();

        assert!(store.remove("c", "a").is_ok());
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_remove_nonexistent() {
        let mut store: CacheStore = CacheStore::new(100, HOUR);

        assert!(matches!(store.remove("c", "a"), Err(CacheError::NotFound { .. })));
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_empty_collection_persists() {
        let mut store = CacheStore::new(100, HOUR);
        store.store("c", "a", json!(1)).unwrap();
        store.remove("c", "a").unwrap();

        assert_eq!(store.collection_count(), 1);
        assert_eq!(store.collection_names(), vec!["c".to_string()]);
        assert!(store.collection_keys("c").is_empty());
    }

    #[test]
    fn test_collections_are_isolated() {
        let mut store = CacheStore::new(100, HOUR);
        store.store("A", "k", json!("in A")).unwrap();

        assert!(matches!(store.fetch("B", "k"), Err(CacheError::NotFound { .. })));

        store.store("B", "k", json!("in B")).unwrap();
        assert_eq!(store.fetch("A", "k").unwrap().value, json!("in A"));
        assert_eq!(store.fetch("B", "k").unwrap().value, json!("in B"));

        store.remove("B", "k").unwrap();
        assert_eq!(store.fetch("A", "k").unwrap().value, json!("in A"));
    }

    #[test]
    fn test_evict_if_expired() {
        let t0 = Utc::now();
        let mut store = CacheStore::new(100, HOUR);
        store.store_at("c", "old", json!(1), t0).unwrap();
        store.store_at("c", "new", json!(2), t0 + hours(2)).unwrap();

        let now = t0 + hours(2);
        assert!(store.evict_if_expired("c", "old", now));
        assert!(!store.evict_if_expired("c", "new", now));
        assert!(!store.evict_if_expired("c", "old", now));
        assert!(!store.evict_if_expired("missing", "old", now));

        assert_eq!(store.live_count(), 1);
        assert_eq!(store.counted_entries(), 1);
    }

    #[test]
    fn test_stats() {
        let mut store = CacheStore::new(100, HOUR);
        store.store("c", "a", json!(1)).unwrap();
        store.fetch("c", "a").unwrap();
        let _ = store.fetch("c", "missing");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.live_entries, 1);
        assert_eq!(stats.collections, 1);
    }

    #[test]
    fn test_capacity_scenario() {
        let t0 = Utc::now();
        let mut store = CacheStore::new(2, HOUR);

        store.store_at("c", "a", json!(1), t0).unwrap();
        assert_eq!(store.live_count(), 1);
        store.store_at("c", "b", json!(2), t0).unwrap();
        assert_eq!(store.live_count(), 2);

        assert!(matches!(
            store.store_at("c", "c", json!(3), t0),
            Err(CacheError::Overflow)
        ));

        store.store_at("c", "a", json!(99), t0).unwrap();
        assert_eq!(store.live_count(), 2);

        assert!(store.fetch_at("c", "a", t0 + hours(2)).is_err());
        assert_eq!(store.live_count(), 1);

        store.store_at("c", "c", json!(3), t0 + hours(2)).unwrap();
        assert_eq!(store.live_count(), 2);
    }
}
