use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use shiftslot_core::CalendarStore;
use shiftslot_domain::{CalendarRecord, RecordDraft, StoreError, StoreResult};

/// In-memory mock for `CalendarStore`.
///
/// Keeps records in insertion order and returns those overlapping the
/// requested range. Writes can be made to fail to exercise conflict paths.
#[derive(Default, Clone)]
pub struct InMemoryCalendarStore {
    records: Arc<Mutex<Vec<CalendarRecord>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    list_calls: Arc<Mutex<Vec<(DateTime<FixedOffset>, DateTime<FixedOffset>)>>>,
}

impl InMemoryCalendarStore {
    /// Create a new store seeded with the provided records.
    pub fn new(records: Vec<CalendarRecord>) -> Self {
        Self { records: Arc::new(Mutex::new(records)), ..Self::default() }
    }

    pub fn records(&self) -> Vec<CalendarRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn find(&self, id: &str) -> Option<CalendarRecord> {
        self.records.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    pub fn insert(&self, record: CalendarRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> Vec<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        self.list_calls.lock().unwrap().clone()
    }

    fn check_write(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write rejected".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CalendarStore for InMemoryCalendarStore {
    async fn list_records(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> StoreResult<Vec<CalendarRecord>> {
        self.list_calls.lock().unwrap().push((start, end));
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("calendar offline".into()));
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.start < end && record.end > start)
            .cloned()
            .collect())
    }

    async fn create_record(&self, draft: RecordDraft) -> StoreResult<String> {
        self.check_write()?;
        let id = uuid::Uuid::new_v4().to_string();
        self.records.lock().unwrap().push(CalendarRecord::from_draft(id.clone(), draft));
        Ok(id)
    }

    async fn update_record(&self, id: &str, title: &str, body: &str) -> StoreResult<()> {
        self.check_write()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.title = title.to_string();
        record.body = body.to_string();
        Ok(())
    }

    async fn delete_record(&self, id: &str) -> StoreResult<()> {
        self.check_write()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
