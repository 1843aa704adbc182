//! API Module
//!
//! HTTP handlers and routing for the cache server REST API. Every cache
//! operation is addressed by the `collection` and `key` request headers.
//!
//! # Endpoints
//! - `GET /cache/v1/get` - Fetch an entry
//! - `POST /cache/v1/post` - Store a JSON value
//! - `DELETE /cache/v1/delete` - Remove an entry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
