//! Slot availability
//!
//! Classifies every hour of the day's window for one viewer. The pure
//! [`compute_availability`] does the work; [`AvailabilityService`] feeds it
//! from the ports and the optional day cache.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::NaiveDate;
use shiftslot_domain::{CalendarRecord, DayAvailability, Directory, Result, ShiftClock, SlotState};
use tracing::debug;

use super::identity::resolve_occupancy;
use super::window::resolve_window;
use super::{classify, slot_records};
use crate::cache::DayRecordsCache;
use crate::calendar_ports::CalendarStore;
use crate::directory::ports::DirectoryStore;

/// Classify each window hour of `date` as seen by `viewer`.
///
/// Hours the viewer already holds go to `my_hours` and are left out of the
/// map. With no anchor the day is closed and both are empty.
pub fn compute_availability(
    date: NaiveDate,
    records: &[CalendarRecord],
    directory: &Directory,
    viewer: &str,
    clock: ShiftClock,
) -> DayAvailability {
    let Some(window) = resolve_window(records) else {
        return DayAvailability::closed(date);
    };

    let mut taken: BTreeMap<u32, SlotState> = BTreeMap::new();
    let mut my_hours = BTreeSet::new();

    for (hour, record) in slot_records(records, clock, date) {
        if !window.contains(hour) {
            continue;
        }
        let occupancy = resolve_occupancy(record, directory);
        if occupancy.contains(viewer) {
            my_hours.insert(hour);
            continue;
        }

        let state = classify(&occupancy);
        match taken.get(&hour) {
            Some(current) if current.restrictiveness() >= state.restrictiveness() => {}
            _ => {
                taken.insert(hour, state);
            }
        }
    }

    let slots = window
        .hours()
        .filter(|hour| !my_hours.contains(hour))
        .map(|hour| (hour, taken.remove(&hour).unwrap_or(SlotState::Free)))
        .collect();

    DayAvailability { date: Some(date), window: Some(window), slots, my_hours }
}

/// Availability reads over the calendar and directory ports
pub struct AvailabilityService {
    calendar: Arc<dyn CalendarStore>,
    directory: Arc<dyn DirectoryStore>,
    clock: ShiftClock,
    cache: Option<DayRecordsCache>,
}

impl AvailabilityService {
    pub fn new(
        calendar: Arc<dyn CalendarStore>,
        directory: Arc<dyn DirectoryStore>,
        clock: ShiftClock,
    ) -> Self {
        Self { calendar, directory, clock, cache: None }
    }

    /// Serve day records from a caller-owned cache
    pub fn with_cache(mut self, cache: DayRecordsCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Availability of one day for `viewer` (an email).
    ///
    /// # Errors
    /// `StoreUnavailable` when the calendar or directory cannot be read.
    pub async fn day_availability(&self, date: NaiveDate, viewer: &str) -> Result<DayAvailability> {
        let records = self.day_records(date).await?;
        let directory = Directory::from_entries(self.directory.load_all().await?);
        Ok(compute_availability(date, &records, &directory, viewer, self.clock))
    }

    async fn day_records(&self, date: NaiveDate) -> Result<Arc<Vec<CalendarRecord>>> {
        if let Some(records) = self.cache.as_ref().and_then(|cache| cache.get(date)) {
            debug!(%date, "Day records served from cache");
            return Ok(records);
        }

        let (start, end) = self.clock.day_range(date)?;
        let records = self.calendar.list_records(start, end).await?;
        debug!(%date, count = records.len(), "Fetched day records");

        Ok(match &self.cache {
            Some(cache) => cache.insert(date, records),
            None => Arc::new(records),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration};
    use shiftslot_domain::DirectoryEntry;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn record(start: &str, title: &str, body: &str) -> CalendarRecord {
        let start = DateTime::parse_from_rfc3339(start).unwrap();
        CalendarRecord {
            id: format!("{title}@{start}"),
            title: title.into(),
            body: body.into(),
            start,
            end: start + Duration::hours(1),
        }
    }

    fn anchor() -> CalendarRecord {
        record("2025-03-10T00:00:00+01:00", "7:00-18:00", "")
    }

    fn directory() -> Directory {
        Directory::from_entries(vec![
            DirectoryEntry::new("jan@example.org", "Jan", "Nowak"),
            DirectoryEntry::new("anna@example.org", "Anna", "Kowalska"),
            DirectoryEntry::new("ola@example.org", "Ola", "Wiśniewska"),
        ])
    }

    fn compute(records: &[CalendarRecord], viewer: &str) -> DayAvailability {
        compute_availability(date(), records, &directory(), viewer, ShiftClock::default())
    }

    #[test]
    fn closed_day_without_anchor() {
        let availability = compute(&[record("2025-03-10T10:00:00+01:00", "Jan Nowak", "")], "ola@example.org");
        assert!(availability.slots.is_empty());
        assert!(availability.my_hours.is_empty());
        assert!(availability.window.is_none());
    }

    #[test]
    fn empty_window_is_all_free() {
        let availability = compute(&[anchor()], "ola@example.org");
        assert_eq!(availability.slots.len(), 11);
        assert_eq!(availability.state(7), Some(&SlotState::Free));
        assert_eq!(availability.state(18), None);
    }

    #[test]
    fn title_only_slot_is_joinable_for_others_and_mine_for_owner() {
        let records = vec![anchor(), record("2025-03-10T10:00:00+01:00", "Jan Nowak", "")];

        let other = compute(&records, "ola@example.org");
        assert_eq!(other.state(10), Some(&SlotState::Joinable("Jan Nowak".into())));

        let owner = compute(&records, "jan@example.org");
        assert!(owner.my_hours.contains(&10));
        assert_eq!(owner.state(10), None);
    }

    #[test]
    fn pair_and_foreign_records_are_full() {
        let records = vec![
            anchor(),
            record("2025-03-10T09:00:00+01:00", "Jan Nowak i Anna Kowalska", "email:jan@example.org, anna@example.org"),
            record("2025-03-10T11:00:00+01:00", "Przegląd instalacji", ""),
        ];
        let availability = compute(&records, "ola@example.org");
        assert_eq!(availability.state(9), Some(&SlotState::Full));
        assert_eq!(availability.state(11), Some(&SlotState::Full));
    }

    #[test]
    fn records_outside_window_or_off_the_hour_are_ignored() {
        let records = vec![
            anchor(),
            record("2025-03-10T06:00:00+01:00", "Przegląd", ""),
            record("2025-03-10T18:00:00+01:00", "Przegląd", ""),
            record("2025-03-10T12:30:00+01:00", "Przegląd", ""),
        ];
        let availability = compute(&records, "ola@example.org");
        assert!(availability.slots.values().all(|state| *state == SlotState::Free));
        assert_eq!(availability.state(12), Some(&SlotState::Free));
    }

    #[test]
    fn most_restrictive_record_wins_shared_hour() {
        let records = vec![
            anchor(),
            record("2025-03-10T14:00:00+01:00", "Anna Kowalska", "email:anna@example.org"),
            record("2025-03-10T14:00:00+01:00", "Spotkanie", ""),
            record("2025-03-10T15:00:00+01:00", "Spotkanie", ""),
            record("2025-03-10T15:00:00+01:00", "Anna Kowalska", "email:anna@example.org"),
        ];
        let availability = compute(&records, "ola@example.org");
        assert_eq!(availability.state(14), Some(&SlotState::Full));
        assert_eq!(availability.state(15), Some(&SlotState::Full));
    }
}
