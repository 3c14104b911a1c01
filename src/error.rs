//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.
//!
//! Misses, expired reads, and deletes of absent keys are ordinary return
//! values, not errors; the cache itself only fails on a malformed TTL.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// TTL input that cannot be resolved to a positive duration
    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
