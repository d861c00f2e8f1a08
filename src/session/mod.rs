//! Session Module
//!
//! The well-known memoization point for "the current authenticated
//! session" and its sign-out invalidation hook.

mod facade;

pub use facade::SessionCache;
