//! Cache Key Module
//!
//! Canonical key representation for cache entries.
//!
//! Product ids arrive as numbers on the lookup path and occasionally as
//! strings (route parameters, admin tooling). Funneling every key through
//! this newtype guarantees a single representation, so `42` and `"42"` can
//! never coexist as two distinct entries for the same product.

use std::fmt;

// == Cache Key ==
/// Canonical string key for a cache entry.
///
/// Construct via the `From` impls; there is no other way to build one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for CacheKey {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_numeric_id() {
        let key = CacheKey::from(42u64);
        assert_eq!(key.as_str(), "42");
    }

    #[test]
    fn test_key_numeric_and_string_forms_agree() {
        assert_eq!(CacheKey::from(42u64), CacheKey::from("42"));
    }

    #[test]
    fn test_key_from_string() {
        let key = CacheKey::from("product:7".to_string());
        assert_eq!(key.as_str(), "product:7");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(CacheKey::from(9u64).to_string(), "9");
    }
}
