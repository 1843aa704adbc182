//! Expiry Sweep Task
//!
//! Background task that periodically walks every collection and removes
//! expired entries.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Runs one sweep pass at `now` and returns the number of removed entries.
///
/// The lock is taken once for the collection list, once per collection for
/// its key list, and once per key. Requests interleave between steps, so
/// each key is re-resolved under its own lock before being evicted.
pub async fn sweep_expired_at(cache: &SharedCache, now: DateTime<Utc>) -> usize {
    let collections = cache.lock().await.collection_names();
    let mut removed = 0;

    for collection in collections {
        let keys = cache.lock().await.collection_keys(&collection);

        for key in keys {
            let evicted = cache.lock().await.evict_if_expired(&collection, &key, now);
            if evicted {
                debug!(%collection, %key, "Sweep evicted expired entry");
                removed += 1;
            }
        }
    }

    removed
}

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// The task sleeps first, so the first pass runs one interval after start.
/// The returned handle is used to abort the task during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = cache::shared(CacheStore::new(1024, Duration::from_secs(7200)));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: SharedCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval = ?interval, "Starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = sweep_expired_at(&cache, Utc::now()).await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
