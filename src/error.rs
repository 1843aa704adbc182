//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The `collection` header is absent or empty
    #[error("Collection request header not found")]
    MissingCollection,

    /// The `key` header is absent or empty
    #[error("Key request header not found")]
    MissingKey,

    /// Key absent or expired
    #[error("Key {key:?} not found in Collection {collection:?}")]
    NotFound { collection: String, key: String },

    /// Live-entry ceiling reached on a new key
    #[error("Cache Overflow")]
    Overflow,

    /// Request body is not a JSON document
    #[error("Invalid Json payload")]
    MalformedPayload(#[from] serde_json::Error),
}

impl CacheError {
    pub fn not_found(collection: &str, key: &str) -> Self {
        CacheError::NotFound {
            collection: collection.to_string(),
            key: key.to_string(),
        }
    }

    // == Status Code ==
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::MissingCollection | CacheError::MissingKey => StatusCode::BAD_REQUEST,
            CacheError::NotFound { .. } => StatusCode::NOT_FOUND,
            CacheError::Overflow => StatusCode::FORBIDDEN,
            CacheError::MalformedPayload(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));
        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
