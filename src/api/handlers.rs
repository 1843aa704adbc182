//! API Handlers
//!
//! HTTP request handlers translating header-addressed requests into cache
//! store operations.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde_json::Value;

use crate::cache::{self, CacheStore, SharedCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CacheTarget, EntryResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the single cache store behind its exclusive lock.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache store
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: cache::shared(cache),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.capacity, config.ttl))
    }
}

/// Handler for GET /cache/v1/get
///
/// Returns the live entry addressed by the `collection` and `key` headers.
pub async fn fetch_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<EntryResponse>> {
    let target = CacheTarget::from_headers(&headers)?;

    let entry = state.cache.lock().await.fetch(&target.collection, &target.key)?;

    Ok(Json(EntryResponse::new(target.collection, target.key, entry)))
}

/// Handler for POST /cache/v1/post
///
/// Stores the JSON request body under the `collection` and `key` headers.
/// Headers are validated before the body is decoded.
pub async fn store_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EntryResponse>> {
    let target = CacheTarget::from_headers(&headers)?;
    let value: Value = serde_json::from_slice(&body)?;

    let entry = state
        .cache
        .lock()
        .await
        .store(&target.collection, &target.key, value)?;

    Ok(Json(EntryResponse::new(target.collection, target.key, entry)))
}

/// Handler for DELETE /cache/v1/delete
///
/// Removes the entry addressed by the `collection` and `key` headers and
/// returns it.
pub async fn remove_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<EntryResponse>> {
    let target = CacheTarget::from_headers(&headers)?;

    let entry = state.cache.lock().await.remove(&target.collection, &target.key)?;

    Ok(Json(EntryResponse::new(target.collection, target.key, entry)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    let stats = cache.stats();

    Json(StatsResponse::new(&stats, cache.capacity(), cache.ttl().as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
