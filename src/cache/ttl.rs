//! TTL Module
//!
//! Time-to-live inputs for `set`, either as an exact duration or as a
//! shorthand string such as `"30m"` or `"1h"` (minutes and hours only).
//!
//! Malformed shorthand is rejected outright. Falling back silently would
//! leave the entry with an unintended lifetime, which is exactly the kind
//! of bug this parser exists to prevent.

use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

// == TTL ==
/// A time-to-live supplied at insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ttl {
    /// An exact duration.
    Exact(Duration),
    /// Shorthand form: `"<N>m"` (minutes) or `"<N>h"` (hours).
    Shorthand(String),
}

impl Ttl {
    /// Resolves this TTL to a concrete duration.
    ///
    /// # Errors
    /// `CacheError::InvalidTtl` if the shorthand does not match `<N>m`/`<N>h`
    /// or the resulting duration is zero.
    pub fn resolve(&self) -> Result<Duration> {
        match self {
            Ttl::Exact(duration) => {
                if duration.is_zero() {
                    return Err(CacheError::InvalidTtl("zero duration".to_string()));
                }
                Ok(*duration)
            }
            Ttl::Shorthand(text) => parse_shorthand(text),
        }
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        Ttl::Exact(duration)
    }
}

impl FromStr for Ttl {
    type Err = CacheError;

    /// Parses shorthand eagerly so callers learn about bad input at the
    /// edge rather than at insertion time.
    fn from_str(s: &str) -> Result<Self> {
        parse_shorthand(s)?;
        Ok(Ttl::Shorthand(s.to_string()))
    }
}

// == Shorthand Parser ==
/// Parses `"<N>m"` or `"<N>h"` into a duration.
fn parse_shorthand(text: &str) -> Result<Duration> {
    let (amount, unit_secs) = if let Some(minutes) = text.strip_suffix('m') {
        (minutes, 60u64)
    } else if let Some(hours) = text.strip_suffix('h') {
        (hours, 3600u64)
    } else {
        return Err(CacheError::InvalidTtl(text.to_string()));
    };

    let amount: u64 = amount
        .parse()
        .map_err(|_| CacheError::InvalidTtl(text.to_string()))?;

    if amount == 0 {
        return Err(CacheError::InvalidTtl(text.to_string()));
    }

    let secs = amount
        .checked_mul(unit_secs)
        .ok_or_else(|| CacheError::InvalidTtl(text.to_string()))?;
    Ok(Duration::from_secs(secs))
}
