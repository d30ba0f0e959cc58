//! A TTL-aware, in-memory cache in front of a data source.
//!
//! [`SourceCache`] keeps the last [`LoadResult`] together with the time it was
//! fetched so that repeated renders within the TTL don't hit the source again.

use super::{LoadResult, MetricSource};
use chrono::{DateTime, Utc};
use core::time::Duration;

const LOG_TARGET: &str = "     cache";

#[derive(Debug)]
struct CacheEntry {
    value: LoadResult,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SourceCache<S> {
    source: S,
    ttl: Duration,
    entry: Option<CacheEntry>,
}

impl<S: MetricSource> SourceCache<S> {
    #[must_use]
    pub const fn new(source: S, ttl: Duration) -> Self {
        Self { source, ttl, entry: None }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached load result, reloading the source if the entry is absent or expired as of `now`.
    pub fn get(&mut self, now: DateTime<Utc>) -> &LoadResult {
        let fresh = self.entry.as_ref().is_some_and(|entry| self.is_fresh(entry, now));
        if !fresh {
            self.entry = None;
        }

        let source = &self.source;
        let entry = self.entry.get_or_insert_with(|| {
            log::debug!(target: LOG_TARGET, "Loading {}", source.describe());
            CacheEntry {
                value: source.load(),
                fetched_at: now,
            }
        });

        &entry.value
    }

    /// Drop the cached entry so the next call to [`Self::get`] reloads the source.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(entry.fetched_at);
        if age.num_milliseconds() < 0 {
            log::debug!(target: LOG_TARGET, "Cache timestamp for {} is in the future (clock skew detected), treating as fresh", self.source.describe());
            return true;
        }

        let age = age.to_std().unwrap_or(Duration::MAX);
        if age >= self.ttl {
            log::debug!(target: LOG_TARGET, "Cache expired for {} (age: {:.1}s, TTL: {:.1}s)", self.source.describe(), age.as_secs_f64(), self.ttl.as_secs_f64());
            return false;
        }

        log::debug!(target: LOG_TARGET, "Cache hit for {} (age: {:.1}s)", self.source.describe(), age.as_secs_f64());
        true
    }
}
