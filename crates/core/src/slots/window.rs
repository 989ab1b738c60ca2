//! Shift window resolution

use shiftslot_domain::{CalendarRecord, ShiftWindow};

/// Window of the day: the first anchor record in store order wins. A
/// malformed range on that record closes the day.
pub fn resolve_window(records: &[CalendarRecord]) -> Option<ShiftWindow> {
    records.iter().find(|record| record.is_anchor()).and_then(CalendarRecord::anchor_window)
}
