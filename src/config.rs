//! Configuration Module
//!
//! Handles cache tuning loaded from environment variables or built
//! programmatically.

use std::env;
use std::time::Duration;

/// TTL applied when nothing else is configured: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Cache configuration parameters.
///
/// The single tunable is the entry time-to-live. It can come from the
/// environment or be set explicitly; a zero TTL disables caching.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live applied to every stored entry
    pub ttl: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment
    /// variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CELL_TTL_MS` - entry TTL in milliseconds (default: 300000)
    pub fn from_env() -> Self {
        Self {
            ttl: env::var("MEMO_CELL_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TTL),
        }
    }

    /// Replaces the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}
