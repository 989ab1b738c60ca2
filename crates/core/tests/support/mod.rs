//! Shared test helpers for `shiftslot-core` integration tests.
//!
//! In-memory ports and fixtures so the scenario tests can focus on behaviour
//! instead of boilerplate.

#![allow(dead_code)]

pub mod calendar;
pub mod directory;
pub mod notifier;

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use shiftslot_core::{NotificationDispatcher, ShiftEngine};
use shiftslot_domain::{CalendarRecord, DirectoryEntry, EngineConfig, ShiftClock};

pub use calendar::InMemoryCalendarStore;
pub use directory::InMemoryDirectory;
pub use notifier::RecordingNotifier;

pub const JAN: &str = "jan@example.org";
pub const ANNA: &str = "anna@example.org";
pub const OLA: &str = "ola@example.org";
pub const PIOTR: &str = "piotr@example.org";

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn clock() -> ShiftClock {
    ShiftClock::new(chrono_tz::Europe::Warsaw)
}

/// Local start of `hour` on [`day`].
pub fn at(hour: u32) -> DateTime<FixedOffset> {
    clock().hour_range(day(), hour).unwrap().0
}

pub fn members() -> Vec<DirectoryEntry> {
    vec![
        DirectoryEntry::new(JAN, "Jan", "Kowalski"),
        DirectoryEntry::new(ANNA, "Anna", "Nowak"),
        DirectoryEntry::new(OLA, "Ola", "Wiśniewska"),
        DirectoryEntry::new(PIOTR, "Piotr", "Zieliński"),
    ]
}

/// One-hour record starting at `hour` on [`day`].
pub fn slot(id: &str, hour: u32, title: &str, body: &str) -> CalendarRecord {
    let start = at(hour);
    CalendarRecord {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        start,
        end: start + Duration::hours(1),
    }
}

/// All-day anchor for [`day`].
pub fn anchor(title: &str) -> CalendarRecord {
    let (start, end) = clock().day_range(day()).unwrap();
    CalendarRecord {
        id: "anchor".to_string(),
        title: title.to_string(),
        body: String::new(),
        start,
        end,
    }
}

/// Ports plus an engine wired over them.
pub struct Harness {
    pub calendar: Arc<InMemoryCalendarStore>,
    pub directory: Arc<InMemoryDirectory>,
    pub notifier: Arc<RecordingNotifier>,
    pub engine: ShiftEngine,
}

impl Harness {
    pub fn new(records: Vec<CalendarRecord>) -> Self {
        Self::with_config(records, EngineConfig::default())
    }

    pub fn with_config(records: Vec<CalendarRecord>, config: EngineConfig) -> Self {
        let calendar = Arc::new(InMemoryCalendarStore::new(records));
        let directory = Arc::new(InMemoryDirectory::new(members()));
        let notifier = Arc::new(RecordingNotifier::default());
        let engine = ShiftEngine::new(&config, calendar.clone(), directory.clone(), notifier.clone())
            .unwrap();
        Self { calendar, directory, notifier, engine }
    }

    pub fn dispatcher(&self) -> NotificationDispatcher {
        NotificationDispatcher::new(self.notifier.clone())
    }
}
