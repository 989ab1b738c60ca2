//! Slot engine: window, identity, availability, booking and cancellation

pub mod availability;
pub mod booking;
pub mod cancellation;
pub mod identity;
pub mod window;

use chrono::NaiveDate;
use shiftslot_domain::{CalendarRecord, Occupancy, ShiftClock, SlotState};
use tracing::debug;

pub use availability::{compute_availability, AvailabilityService};
pub use booking::BookingCoordinator;
pub use cancellation::CancellationCoordinator;
pub use identity::resolve_occupancy;
pub use window::resolve_window;

/// Non-anchor records starting exactly on an hour of `date`, with that hour.
pub(crate) fn slot_records<'a>(
    records: &'a [CalendarRecord],
    clock: ShiftClock,
    date: NaiveDate,
) -> impl Iterator<Item = (u32, &'a CalendarRecord)> + 'a {
    records.iter().filter(|record| !record.is_anchor()).filter_map(move |record| {
        match clock.slot_position(&record.start) {
            Some((day, hour)) if day == date => Some((hour, record)),
            Some(_) => None,
            None => {
                debug!(record_id = %record.id, start = %record.start, "Skipping record not aligned to an hour");
                None
            }
        }
    })
}

/// State of a slot for someone who is not in it.
pub(crate) fn classify(occupancy: &Occupancy) -> SlotState {
    if occupancy.is_foreign() || occupancy.is_full() {
        return SlotState::Full;
    }
    match occupancy.organizer() {
        Some(occupant) => SlotState::Joinable(occupant.display_name.clone()),
        None => SlotState::Free,
    }
}
