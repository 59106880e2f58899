//! Cache Module
//!
//! Provides insertion-ordered key/value storage with per-entry retention
//! and lazy expiration against a pluggable clock.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::ExpirableEntry;
pub use stats::CacheStats;
pub use store::AgedCache;

// == Public Constants ==
/// Initial capacity of the backing storage; growth doubles from here
pub const INITIAL_CAPACITY: usize = 10;
