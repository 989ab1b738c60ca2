//! Per-day calendar records cache.
//!
//! Owned by the caller and handed to the services that read through it. Only
//! availability reads are served from here; booking and cancellation always
//! go to the store and invalidate the day they touched.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//!
//! use chrono::NaiveDate;
//! use shiftslot_core::cache::DayRecordsCache;
//!
//! let cache = DayRecordsCache::new(Duration::from_secs(60), 64);
//! let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//!
//! cache.insert(day, Vec::new());
//! assert!(cache.get(day).is_some());
//! cache.invalidate(day);
//! assert!(cache.get(day).is_none());
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache;
use shiftslot_domain::{CacheConfig, CalendarRecord};

/// Thread-safe day records cache with TTL-based eviction.
#[derive(Clone)]
pub struct DayRecordsCache {
    cache: Cache<NaiveDate, Arc<Vec<CalendarRecord>>>,
}

impl DayRecordsCache {
    #[must_use]
    pub fn new(ttl: Duration, max_days: u64) -> Self {
        Self { cache: Cache::builder().time_to_live(ttl).max_capacity(max_days).build() }
    }

    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Duration::from_secs(config.ttl_seconds), config.max_days)
    }

    /// Records cached for a day, if present and not expired.
    pub fn get(&self, day: NaiveDate) -> Option<Arc<Vec<CalendarRecord>>> {
        self.cache.get(&day)
    }

    pub fn insert(&self, day: NaiveDate, records: Vec<CalendarRecord>) -> Arc<Vec<CalendarRecord>> {
        let records = Arc::new(records);
        self.cache.insert(day, Arc::clone(&records));
        records
    }

    pub fn invalidate(&self, day: NaiveDate) {
        self.cache.invalidate(&day);
        tracing::debug!(%day, "Invalidated cached day records");
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl std::fmt::Debug for DayRecordsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayRecordsCache").field("entries", &self.cache.entry_count()).finish()
    }
}
