//! Calendar store port
//!
//! The external event calendar is the only persistent state. It offers no
//! transactions, locks, or read-after-write guarantees; callers re-read
//! right before every write.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use shiftslot_domain::{CalendarRecord, RecordDraft, StoreResult};

/// Trait for calendar record storage
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Timed records overlapping `[start, end)`, in store order
    async fn list_records(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> StoreResult<Vec<CalendarRecord>>;

    /// Create a record and return its store-assigned id
    async fn create_record(&self, draft: RecordDraft) -> StoreResult<String>;

    /// Replace a record's title and body
    async fn update_record(&self, id: &str, title: &str, body: &str) -> StoreResult<()>;

    /// Delete a record
    async fn delete_record(&self, id: &str) -> StoreResult<()>;
}
