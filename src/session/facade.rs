//! Session Cache Facade
//!
//! A shared, thread-safe handle memoizing an asynchronous session lookup,
//! invalidated explicitly on sign-out.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CellStats, TtlCell};
use crate::config::CacheConfig;

// == Session Cache ==
/// Thread-safe handle around a single [`TtlCell`], memoizing the result
/// of a fallible asynchronous session resolution.
///
/// Clones share the same slot, so an application constructs one cache at
/// startup and hands clones to whatever resolves or invalidates sessions.
/// Nothing persists: a process restart resets the cache to empty.
#[derive(Debug, Clone)]
pub struct SessionCache<T> {
    /// Shared slot; the lock is never held across an await
    cell: Arc<Mutex<TtlCell<T>>>,
}

impl<T: Clone> SessionCache<T> {
    // == Constructors ==
    /// Creates a session cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_ttl(config.ttl)
    }

    /// Creates a session cache whose entries live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cell: Arc::new(Mutex::new(TtlCell::new(ttl))),
        }
    }

    // == Get Or Resolve ==
    /// Returns the session cached under `key`, or awaits `resolve` and
    /// caches its result.
    ///
    /// A resolver failure propagates unmodified and nothing is stored, so
    /// the next call resolves again (no negative caching). The value is
    /// stored only after the resolver has fully succeeded; a resolver
    /// future dropped mid-flight leaves the slot untouched.
    ///
    /// The internal lock is released while `resolve` runs, so concurrent
    /// callers may resolve the same key more than once. The slot is
    /// overwrite-only, so the last writer wins and every caller still
    /// observes a complete value.
    pub async fn get_or_resolve<F, Fut, E>(&self, key: &str, resolve: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(session) = self.lock().get(key) {
            trace!(key, "session cache hit");
            return Ok(session);
        }

        debug!(key, "session cache miss, resolving");
        let session = resolve().await?;
        self.lock().set(key, session.clone());

        Ok(session)
    }

    // == Invalidate ==
    /// Discards the cached session. Idempotent.
    ///
    /// Call this before forwarding a sign-out to the authentication
    /// backend, so a request landing inside the TTL window cannot observe
    /// a cached "still signed in" session.
    pub fn invalidate(&self) {
        debug!("session cache invalidated");
        self.lock().clear();
    }

    // == Stats ==
    /// Returns a snapshot of the underlying cell's counters.
    pub fn stats(&self) -> CellStats {
        self.lock().stats()
    }

    /// The slot is overwrite-only and consistent at every instruction
    /// boundary, so a lock poisoned by a panicking holder is safe to keep
    /// using.
    fn lock(&self) -> MutexGuard<'_, TtlCell<T>> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
