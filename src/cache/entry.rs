//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute
//! expiration instant.

use chrono::{DateTime, Utc};

// == Expirable Entry ==
/// A single key/value pair bound to an absolute expiration instant.
///
/// Entries are immutable once created. The expiration instant is computed at
/// insertion time as `now + retention`; the entry itself never reads a clock,
/// so expiration checks take the caller's notion of "now".
#[derive(Debug, Clone)]
pub struct ExpirableEntry<K, V> {
    key: K,
    value: V,
    expires_at: DateTime<Utc>,
}

impl<K, V> ExpirableEntry<K, V> {
    // == Constructor ==
    /// Creates an entry expiring at the given absolute instant.
    pub fn new(key: K, value: V, expires_at: DateTime<Utc>) -> Self {
        Self {
            key,
            value,
            expires_at,
        }
    }

    /// Returns the entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the entry's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at the given instant.
    ///
    /// Boundary condition: an entry is expired when `now` is at or after the
    /// expiration instant, so an entry inserted with zero retention is
    /// already expired at its own insertion instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds at the given instant.
    ///
    /// # Returns
    /// - `0` if the entry has expired
    /// - the number of milliseconds until expiration otherwise
    pub fn ttl_remaining_ms(&self, now: DateTime<Utc>) -> u64 {
        if self.expires_at > now {
            (self.expires_at - now).num_milliseconds() as u64
        } else {
            0
        }
    }
}
