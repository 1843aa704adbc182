//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: removes expired cache entries independent of client traffic

mod sweep;

pub use sweep::{spawn_sweep_task, sweep_expired_at};
