//! Viewer's own shifts for a month

use std::sync::Arc;

use chrono::Datelike;
use shiftslot_domain::{Directory, Result, ShiftClock, ShiftSummary};
use tracing::debug;

use crate::calendar_ports::CalendarStore;
use crate::directory::ports::DirectoryStore;
use crate::slots::resolve_occupancy;

/// Lists the shifts a member holds
pub struct ScheduleService {
    calendar: Arc<dyn CalendarStore>,
    directory: Arc<dyn DirectoryStore>,
    clock: ShiftClock,
}

impl ScheduleService {
    pub fn new(
        calendar: Arc<dyn CalendarStore>,
        directory: Arc<dyn DirectoryStore>,
        clock: ShiftClock,
    ) -> Self {
        Self { calendar, directory, clock }
    }

    /// Hour-aligned slots in the given month that `viewer` occupies, by start.
    pub async fn shifts_for_month(
        &self,
        year: i32,
        month: u32,
        viewer: &str,
    ) -> Result<Vec<ShiftSummary>> {
        let (start, end) = self.clock.month_range(year, month)?;
        let directory = Directory::from_entries(self.directory.load_all().await?);
        let mut records = self.calendar.list_records(start, end).await?;
        records.sort_by_key(|record| record.start);

        let shifts: Vec<ShiftSummary> = records
            .iter()
            .filter(|record| !record.is_anchor())
            .filter_map(|record| {
                let (date, hour) = self.clock.slot_position(&record.start)?;
                if date.year() != year || date.month() != month {
                    return None;
                }
                let occupancy = resolve_occupancy(record, &directory);
                let position = occupancy.position_of(viewer)?;
                let partner = occupancy
                    .occupants
                    .iter()
                    .enumerate()
                    .find(|(index, _)| *index != position)
                    .map(|(_, occupant)| occupant.display_name.clone());
                Some(ShiftSummary { date, hour, title: record.title.clone(), partner })
            })
            .collect();

        debug!(year, month, count = shifts.len(), "Listed member shifts");
        Ok(shifts)
    }
}
