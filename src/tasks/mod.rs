//! Background Tasks Module
//!
//! Periodic work driven by the cache owner.
//!
//! # Tasks
//! - TTL Cleanup: sweeps expired cache entries at a configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
