//! Cache Module
//!
//! Provides in-memory, collection-partitioned caching with TTL expiration
//! and a hard ceiling on live entries.

mod entry;
pub mod expiry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::Mutex;

// Re-export public types
pub use entry::Entry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Shared Handle ==
/// The store behind one exclusive lock, shared by handlers and the sweeper.
pub type SharedCache = Arc<Mutex<CacheStore>>;

/// Wraps a store into a [`SharedCache`].
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(Mutex::new(store))
}
