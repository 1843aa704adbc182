//! Collection Cache - An in-memory JSON cache server
//!
//! Stores arbitrary JSON values under (collection, key) pairs. Entries expire
//! after a process-wide TTL and are removed lazily on read or by a periodic
//! background sweep. New keys are refused once a live-entry ceiling is hit.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
