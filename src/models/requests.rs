//! Request identity for the cache server API
//!
//! Every cache operation is addressed by the `collection` and `key` request
//! headers.

use axum::http::HeaderMap;

use crate::error::{CacheError, Result};

/// Header carrying the collection name
pub const COLLECTION_HEADER: &str = "collection";

/// Header carrying the key within the collection
pub const KEY_HEADER: &str = "key";

/// The (collection, key) pair a request operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTarget {
    pub collection: String,
    pub key: String,
}

impl CacheTarget {
    /// Reads the target from request headers.
    ///
    /// The collection is checked before the key. Absent, empty and
    /// non-UTF-8 header values all count as missing.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let collection =
            header_value(headers, COLLECTION_HEADER).ok_or(CacheError::MissingCollection)?;
        let key = header_value(headers, KEY_HEADER).ok_or(CacheError::MissingKey)?;

        Ok(Self {
            collection: collection.to_string(),
            key: key.to_string(),
        })
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .filter(|value| !value.is_empty())
}
