//! # Exchange-Rate Cache
//!
//! Process-lifetime cache for the last fetched exchange rate.
//!
//! The cache is shared across all concurrent requests. There is
//! deliberately no mutual exclusion around a refresh: two requests that
//! both observe a stale entry may both fetch, and both stores are
//! idempotent last-write-wins replacements. Slightly stale rates are
//! acceptable; corrupted state is impossible because the entry is
//! replaced whole under the lock.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;

/// A fetched exchange rate with its acquisition time.
///
/// Created on first use or after expiry, superseded by each successful
/// refresh, never explicitly destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate {
    /// Positive multiplier from the base to the quote currency.
    pub rate: Decimal,
    /// When the rate was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Cache holding at most one [`ExchangeRate`].
#[derive(Debug)]
pub struct RateCache {
    entry: Mutex<Option<ExchangeRate>>,
    ttl: Duration,
}

impl RateCache {
    /// Creates an empty cache with the given entry lifetime in seconds.
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entry: Mutex::new(None),
            ttl: Duration::seconds(ttl_secs.min(i64::MAX as u64) as i64),
        }
    }

    /// Returns the cached rate if it is younger than the lifetime.
    #[must_use]
    pub fn fresh(&self, now: DateTime<Utc>) -> Option<Decimal> {
        self.entry
            .lock()
            .as_ref()
            .filter(|e| now.signed_duration_since(e.fetched_at) < self.ttl)
            .map(|e| e.rate)
    }

    /// Returns the cached rate regardless of age.
    #[must_use]
    pub fn last(&self) -> Option<Decimal> {
        self.entry.lock().as_ref().map(|e| e.rate)
    }

    /// Replaces the cache entry. Last write wins.
    pub fn store(&self, rate: Decimal, now: DateTime<Utc>) {
        *self.entry.lock() = Some(ExchangeRate {
            rate,
            fetched_at: now,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn empty_cache_has_nothing() {
        let cache = RateCache::new(3600);
        assert_eq!(cache.fresh(at(0)), None);
        assert_eq!(cache.last(), None);
    }

    #[test]
    fn fresh_within_lifetime_only() {
        let cache = RateCache::new(3600);
        let rate = Decimal::new(74, 2);
        cache.store(rate, at(1000));

        assert_eq!(cache.fresh(at(1000)), Some(rate));
        assert_eq!(cache.fresh(at(1000 + 3599)), Some(rate));
        assert_eq!(cache.fresh(at(1000 + 3600)), None);
        // A stale entry is still visible as the last known value.
        assert_eq!(cache.last(), Some(rate));
    }

    #[test]
    fn store_replaces_whole_entry() {
        let cache = RateCache::new(3600);
        cache.store(Decimal::new(70, 2), at(0));
        cache.store(Decimal::new(75, 2), at(10));
        assert_eq!(cache.fresh(at(10)), Some(Decimal::new(75, 2)));
    }
}
