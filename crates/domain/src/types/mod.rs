//! Domain types and models

pub mod calendar;
pub mod clock;
pub mod directory;
pub mod notice;
pub mod slot;

pub use calendar::{CalendarRecord, RecordDraft};
pub use clock::ShiftClock;
pub use directory::{Directory, DirectoryEntry, Role};
pub use notice::{NoticeKind, ShiftNotice};
pub use slot::{
    BookingKind, BookingOutcome, CancellationKind, CancellationOutcome, DayAvailability,
    Occupancy, Occupant, ShiftSummary, SlotIdentity, SlotState,
};
