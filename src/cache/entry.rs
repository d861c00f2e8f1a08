//! Cache Entry Module
//!
//! Defines the single (key, value, expiry) tuple a cell can hold.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A memoized value together with the key it was stored under and its
/// absolute expiry time.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The only key this entry answers to
    pub key: String,
    /// The stored payload, opaque to the cache
    pub value: T,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    ///
    /// A zero `ttl` produces an entry that is already expired, so a cell
    /// configured with zero TTL is effectively disabled.
    pub fn new(key: String, value: T, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);

        Self {
            key,
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: the entry is valid strictly while
    /// `expires_at > now`. Once the current time reaches the expiration
    /// time the entry is expired, so a value is never served past its
    /// deadline.
    ///
    /// # Returns
    /// - `true` if the current time >= expiration time
    /// - `false` while the TTL window is still open
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Matches ==
    /// Checks whether the stored key exactly equals `key`.
    ///
    /// The entry memoizes a computation parameterized by its key, so a
    /// lookup under any other key must miss even while the value is fresh.
    pub fn matches(&self, key: &str) -> bool {
        self.key == key
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds.
    ///
    /// This method is useful for debugging and statistics purposes.
    ///
    /// # Returns
    /// - `0` if the entry has expired (TTL elapsed)
    /// - the remaining milliseconds otherwise
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            0
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(
            "k".to_string(),
            "test_value".to_string(),
            Duration::from_secs(60),
        );

        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_matches_exact_key_only() {
        let entry = CacheEntry::new("k1".to_string(), 42u32, Duration::from_secs(60));

        assert!(entry.matches("k1"));
        assert!(!entry.matches("k2"));
        assert!(!entry.matches("K1"));
        assert!(!entry.matches(""));
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 50 ms TTL
        let entry = CacheEntry::new("k".to_string(), (), Duration::from_millis(50));

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(80));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_zero_ttl_entry_is_born_expired() {
        let entry = CacheEntry::new("k".to_string(), (), Duration::ZERO);

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("k".to_string(), (), Duration::from_secs(10));

        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("k".to_string(), (), Duration::from_millis(30));

        sleep(Duration::from_millis(60));

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Construct an entry whose deadline is exactly now
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            key: "k".to_string(),
            value: "test".to_string(),
            created_at: now,
            expires_at: now,
        };

        // Valid only while expires_at > now, so this one is already expired
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_extreme_ttl_does_not_panic() {
        // Saturating arithmetic keeps an absurd TTL from overflowing
        let entry = CacheEntry::new("k".to_string(), (), Duration::MAX);

        assert!(!entry.is_expired());
        assert_eq!(entry.expires_at, u64::MAX);
    }
}
