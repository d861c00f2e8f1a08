//! TTL Cell Module
//!
//! The single-slot store: at most one entry at a time, lazily expired on
//! read, unconditionally displaced on write.

use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CellStats};

// == TTL Cell ==
/// A cache that holds at most one `(key, value)` pair at a time.
///
/// This is a memo for a single expensive computation parameterized by a
/// key, not a general key-value map: every `set` replaces whatever was
/// stored, whatever its key, and restarts the expiry window at
/// `now + ttl`. Expiry is checked lazily on read; there is no background
/// sweeper to manage.
///
/// The cell itself is not synchronized (`&mut self` API). Callers that
/// share one across threads wrap it in a lock, as
/// [`SessionCache`](crate::session::SessionCache) does.
#[derive(Debug)]
pub struct TtlCell<T> {
    /// The single slot
    slot: Option<CacheEntry<T>>,
    /// Time-to-live applied to every store
    ttl: Duration,
    /// Performance counters
    stats: CellStats,
}

impl<T> TtlCell<T> {
    // == Constructor ==
    /// Creates an empty cell applying `ttl` to every future store.
    ///
    /// A zero `ttl` is legal and makes every stored entry immediately
    /// expired, which disables caching without disturbing callers.
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: None,
            ttl,
            stats: CellStats::new(),
        }
    }

    // == Get ==
    /// Returns the stored value iff the stored key exactly equals `key`
    /// and the entry has not expired.
    ///
    /// Anything else — empty cell, different key, expired entry — is a
    /// miss. A miss never touches the slot: an expired entry stays in
    /// place, treated as absent, until the next `set` or `clear` reclaims
    /// it.
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        match &self.slot {
            Some(entry) if entry.matches(key) && !entry.is_expired() => {
                self.stats.record_hit();
                trace!(key, "cell hit");
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                trace!(key, "cell miss");
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key`, displacing whatever was held before.
    ///
    /// Storing the same key again before expiry restarts the window
    /// rather than merging values. Displacing an entry stored under a
    /// different key is counted as an eviction.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();

        if let Some(prev) = &self.slot {
            if prev.key != key {
                self.stats.record_eviction();
                debug!(evicted = %prev.key, stored = %key, "slot displaced");
            }
        }

        self.slot = Some(CacheEntry::new(key, value, self.ttl));
    }

    // == Clear ==
    /// Discards the stored entry. Idempotent.
    pub fn clear(&mut self) {
        if self.slot.take().is_some() {
            debug!("cell cleared");
        }
    }

    // == Is Occupied ==
    /// Returns true if the slot physically holds an entry, fresh or not.
    ///
    /// An expired entry still occupies the slot until overwritten or
    /// cleared; it is only treated as absent by `get`.
    pub fn is_occupied(&self) -> bool {
        self.slot.is_some()
    }

    // == TTL ==
    /// Returns the time-to-live applied to every store.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss/eviction counters.
    pub fn stats(&self) -> CellStats {
        self.stats.clone()
    }
}
