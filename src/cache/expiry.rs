//! Expiry Policy Module
//!
//! Decides whether an entry is still live given a process-wide TTL.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Expires At ==
/// Returns the instant after which an entry created at `created_at` is expired.
///
/// Returns `None` when `created_at + ttl` is not representable, which is
/// treated as "never expires".
pub fn expires_at(created_at: DateTime<Utc>, ttl: Duration) -> Option<DateTime<Utc>> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| created_at.checked_add_signed(ttl))
}

// == Is Expired ==
/// Checks liveness of an entry.
///
/// Boundary condition: strictly greater-than. An entry observed exactly at
/// `created_at + ttl` is still live.
pub fn is_expired(created_at: DateTime<Utc>, ttl: Duration, now: DateTime<Utc>) -> bool {
    match expires_at(created_at, ttl) {
        Some(deadline) => now > deadline,
        None => false,
    }
}
