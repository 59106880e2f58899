//! Aged Cache - An insertion-ordered in-memory cache
//!
//! Provides key/value storage with per-entry retention and lazy expiration
//! evaluated against an injected time source.

pub mod cache;

pub use cache::{AgedCache, CacheStats, Clock, ExpirableEntry, ManualClock, SystemClock};
