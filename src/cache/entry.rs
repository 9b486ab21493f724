//! Cache Entry Module
//!
//! A single byte-blob slot in the in-memory backing store.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Stored blob plus its expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized payload
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that lives for `ttl_seconds`, or forever when `None`.
    ///
    /// Lifetimes too long to represent saturate to the far future.
    pub fn new(value: Vec<u8>, ttl_seconds: Option<u64>) -> Self {
        let expires_at =
            ttl_seconds.map(|ttl| current_timestamp_ms().saturating_add(ttl.saturating_mul(1000)));

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new(b"blob".to_vec(), None);

        assert_eq!(entry.value, b"blob");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(b"blob".to_vec(), Some(1));

        assert!(!entry.is_expired());
        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_huge_ttl_saturates_instead_of_overflowing() {
        for ttl in [u64::MAX / 10, u64::MAX] {
            let entry = CacheEntry::new(b"blob".to_vec(), Some(ttl));

            assert_eq!(entry.expires_at, Some(u64::MAX));
            assert!(!entry.is_expired());
        }
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry {
            value: Vec::new(),
            expires_at: Some(current_timestamp_ms()),
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
