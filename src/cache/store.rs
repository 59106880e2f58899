//! Cache Store Module
//!
//! Main cache engine combining insertion-ordered storage with per-entry
//! retention and lazy expiration.
//!
//! Every compacting operation (`insert`, `get`, `len`, `purge_expired`)
//! reads the clock exactly once, then drops every entry whose expiration
//! instant is at or before that reading. The pass is O(n) and rescans the
//! whole sequence each call.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, trace};

use crate::cache::{CacheStats, Clock, ExpirableEntry, SystemClock, INITIAL_CAPACITY};

// == Aged Cache ==
/// Insertion-ordered key/value cache with per-entry retention.
///
/// Entries are appended in insertion order and never overwritten: duplicate
/// keys coexist, and lookup returns the first surviving match. Expired
/// entries are reclaimed lazily by the compaction pass that prefixes each
/// compacting operation; there is no background timer and no explicit
/// delete.
///
/// Single-threaded by contract. Callers needing shared access must add
/// their own synchronization.
#[derive(Debug)]
pub struct AgedCache<K, V, C = SystemClock>
where
    K: PartialEq,
    C: Clock,
{
    /// Entries in insertion order
    entries: Vec<ExpirableEntry<K, V>>,
    /// Time source, owned for the cache's lifetime
    clock: C,
    /// Performance statistics
    stats: CacheStats,
}

impl<K, V> AgedCache<K, V>
where
    K: PartialEq,
{
    // == Constructor ==
    /// Creates an empty cache reading the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<K, V> Default for AgedCache<K, V>
where
    K: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AgedCache<K, V, C>
where
    K: PartialEq,
    C: Clock,
{
    // == Constructor ==
    /// Creates an empty cache with an injected time source.
    ///
    /// The clock is owned for the cache's entire lifetime and is never
    /// replaced. Storage starts at `INITIAL_CAPACITY` and doubles as it
    /// fills.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Insert ==
    /// Stores a key/value pair retained for `retention_ms` milliseconds.
    ///
    /// The expiration instant is computed once, at insertion time, as
    /// `now + retention_ms`. Expired entries are purged before the new one
    /// is appended. Existing entries with the same key are left in place;
    /// they shadow the new entry in lookup order until they expire.
    ///
    /// Zero retention is permitted and yields an entry that is already
    /// expired at its own insertion instant; the next compacting call
    /// reclaims it. Retentions too large for the instant type saturate to
    /// the far end of the representable range, so the entry effectively
    /// never expires.
    pub fn insert(&mut self, key: K, value: V, retention_ms: u64) {
        let retention = TimeDelta::milliseconds(i64::try_from(retention_ms).unwrap_or(i64::MAX));
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(retention)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.purge_expired();

        self.entries.push(ExpirableEntry::new(key, value, expires_at));
        trace!(retention_ms, live_entries = self.entries.len(), "entry inserted");
    }

    // == Get ==
    /// Retrieves the value of the first surviving entry matching `key`.
    ///
    /// Purges expired entries first, so the scan runs against a single
    /// consistent view of time; no retry pass is needed. Keys compare by
    /// value equality.
    ///
    /// # Returns
    /// The value in insertion order, or `None` if no live entry matches.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.purge_expired();

        match self.entries.iter().position(|entry| entry.key() == key) {
            Some(index) => {
                self.stats.record_hit();
                Some(self.entries[index].value())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Length ==
    /// Returns the number of live entries, purging expired ones first.
    ///
    /// Repeated calls with no intervening insert and no passage of time
    /// past an expiration instant return the same value.
    pub fn len(&mut self) -> usize {
        self.purge_expired();
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the raw entry count is zero.
    ///
    /// Intentionally cheap: does **not** purge, so it may report non-empty
    /// while every remaining entry is already expired. Only the compacting
    /// operations force reclamation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Purge Expired ==
    /// Removes every entry whose expiration instant is at or before now.
    ///
    /// Reads the clock once for the whole pass and preserves the relative
    /// order of survivors. Freed slots do not retain the dropped entries.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();

        self.entries.retain(|entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        if removed > 0 {
            self.stats.record_expirations(removed as u64);
            debug!(removed, live_entries = self.entries.len(), "purged expired entries");
        }
        removed
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds of the first surviving
    /// entry matching `key`, or `None` if no live entry matches.
    ///
    /// Useful for debugging and statistics; does not count as a hit or miss.
    pub fn ttl_remaining_ms(&mut self, key: &K) -> Option<u64> {
        self.purge_expired();

        let now = self.clock.now();
        self.entries
            .iter()
            .find(|entry| entry.key() == key)
            .map(|entry| entry.ttl_remaining_ms(now))
    }

    // == Stats ==
    /// Returns a snapshot of cache statistics.
    ///
    /// The entry count reflects the raw stored count at snapshot time; it
    /// is not purged first.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
