//! Request and Response models for the cache server API
//!
//! This module defines request identity extraction and the DTOs used for
//! serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CacheTarget, COLLECTION_HEADER, KEY_HEADER};
pub use responses::{EntryResponse, ErrorResponse, HealthResponse, StatsResponse};
