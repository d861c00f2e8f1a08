//! Memo Cell - a single-slot expiring memo cache
//!
//! Memoizes one expensive-to-recompute value for a bounded time window,
//! trading a small staleness window for avoiding redundant recomputation.
//! A session-cache facade wraps the cell behind a thread-safe handle with
//! an explicit sign-out invalidation hook.

pub mod cache;
pub mod config;
pub mod session;

pub use cache::{CacheEntry, CellStats, TtlCell};
pub use config::CacheConfig;
pub use session::SessionCache;
