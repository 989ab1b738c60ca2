//! Booking coordinator
//!
//! Creates a slot or joins a single-occupant one. The hour is re-read from
//! the store immediately before the write and capacity is checked against
//! that read; two writers racing on the same hour can still both succeed,
//! the last write winning.

use std::sync::Arc;

use chrono::NaiveDate;
use shiftslot_domain::{
    encode_slot, BookingKind, BookingOutcome, CalendarRecord, Directory, NoticeKind, Occupancy,
    Occupant, RecordDraft, Result, ShiftClock, ShiftError, ShiftNotice, SlotState,
};
use tracing::{info, warn};

use super::identity::resolve_occupancy;
use super::window::resolve_window;
use super::{classify, slot_records};
use crate::cache::DayRecordsCache;
use crate::calendar_ports::CalendarStore;
use crate::directory::ports::DirectoryStore;
use crate::notifications::NotificationDispatcher;

/// Creates and joins slots
pub struct BookingCoordinator {
    calendar: Arc<dyn CalendarStore>,
    directory: Arc<dyn DirectoryStore>,
    notifications: NotificationDispatcher,
    clock: ShiftClock,
    enforce_window: bool,
    cache: Option<DayRecordsCache>,
}

impl BookingCoordinator {
    pub fn new(
        calendar: Arc<dyn CalendarStore>,
        directory: Arc<dyn DirectoryStore>,
        notifications: NotificationDispatcher,
        clock: ShiftClock,
    ) -> Self {
        Self { calendar, directory, notifications, clock, enforce_window: false, cache: None }
    }

    /// Read the whole day and reject hours outside its window.
    pub fn with_window_enforcement(mut self, enabled: bool) -> Self {
        self.enforce_window = enabled;
        self
    }

    /// Invalidate this cache's entry for the day after every successful write.
    pub fn with_cache(mut self, cache: DayRecordsCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Book `hour` on `date` for `viewer`, optionally together with `partner`.
    ///
    /// A partner can only be named when the hour has no slot yet.
    ///
    /// # Errors
    /// - `InvalidPartner` when the partner is the viewer or not in the directory
    /// - `CannotPairIntoOccupiedSlot`, `AlreadyBooked` or `SlotFull` when the
    ///   hour already has a slot that cannot take the request
    /// - `NoWindowDefined` / `OutsideWindow` with window enforcement on
    /// - `Conflict` when joining fails at write time
    /// - `StoreUnavailable` when reading or creating fails
    pub async fn book(
        &self,
        date: NaiveDate,
        hour: u32,
        viewer: &str,
        partner: Option<&str>,
    ) -> Result<BookingOutcome> {
        let directory = Directory::from_entries(self.directory.load_all().await?);
        let viewer_entry = directory
            .find_by_email(viewer)
            .ok_or_else(|| ShiftError::InvalidInput(format!("unknown member: {viewer}")))?;
        let me = Occupant::member(viewer_entry.email_key(), viewer_entry.display_name());

        let partner = match partner {
            Some(email) if viewer_entry.has_email(email) => {
                return Err(ShiftError::InvalidPartner(email.to_string()));
            }
            Some(email) => {
                let entry = directory
                    .find_by_email(email)
                    .ok_or_else(|| ShiftError::InvalidPartner(email.to_string()))?;
                Some(Occupant::member(entry.email_key(), entry.display_name()))
            }
            None => None,
        };

        let (start, end) = self.clock.hour_range(date, hour)?;
        let records = self.fetch(date, hour).await?;

        let existing: Vec<(&CalendarRecord, Occupancy)> = slot_records(&records, self.clock, date)
            .filter(|(slot_hour, _)| *slot_hour == hour)
            .map(|(_, record)| (record, resolve_occupancy(record, &directory)))
            .collect();

        let mut joined_organizer = None;
        let outcome = if existing.is_empty() {
            let mut occupants = vec![me.clone()];
            occupants.extend(partner.clone());
            let encoded = encode_slot(&occupants);

            let record_id = self
                .calendar
                .create_record(RecordDraft { title: encoded.title.clone(), body: encoded.body, start, end })
                .await?;

            let kind = if partner.is_some() { BookingKind::CreatedWithPartner } else { BookingKind::Created };
            BookingOutcome { record_id, kind, title: encoded.title }
        } else {
            if partner.is_some() {
                return Err(ShiftError::CannotPairIntoOccupiedSlot);
            }
            if existing.iter().any(|(_, occupancy)| occupancy.contains(viewer)) {
                return Err(ShiftError::AlreadyBooked);
            }
            if existing.iter().any(|(_, occupancy)| classify(occupancy) == SlotState::Full) {
                return Err(ShiftError::SlotFull);
            }
            let (record, occupancy) = existing.first().ok_or(ShiftError::SlotFull)?;

            let mut occupants = occupancy.occupants.clone();
            occupants.push(me.clone());
            let encoded = encode_slot(&occupants);

            self.calendar.update_record(&record.id, &encoded.title, &encoded.body).await.map_err(
                |err| {
                    warn!(error = %err, record_id = %record.id, "Join write failed");
                    ShiftError::Conflict
                },
            )?;

            joined_organizer = occupancy.organizer().cloned();
            BookingOutcome { record_id: record.id.clone(), kind: BookingKind::Joined, title: encoded.title }
        };

        info!(
            %date,
            hour,
            viewer = %me.display_name,
            kind = ?outcome.kind,
            record_id = %outcome.record_id,
            "Slot booked"
        );

        if let Some(cache) = &self.cache {
            cache.invalidate(date);
        }

        let recipient = match outcome.kind {
            BookingKind::Created => None,
            BookingKind::CreatedWithPartner => {
                partner.as_ref().map(|p| (p.clone(), NoticeKind::PairedSlotCreated))
            }
            BookingKind::Joined => {
                joined_organizer.map(|organizer| (organizer, NoticeKind::PartnerJoined))
            }
        };
        if let Some((occupant, kind)) = recipient {
            if let Some(email) = occupant.email() {
                self.notifications
                    .dispatch(ShiftNotice {
                        kind,
                        recipient: email.to_string(),
                        actor: me.display_name.clone(),
                        date,
                        hour,
                    })
                    .await;
            }
        }

        Ok(outcome)
    }

    /// Records to check: the exact hour, or the whole day when the window is
    /// enforced.
    async fn fetch(&self, date: NaiveDate, hour: u32) -> Result<Vec<CalendarRecord>> {
        if !self.enforce_window {
            let (start, end) = self.clock.hour_range(date, hour)?;
            return Ok(self.calendar.list_records(start, end).await?);
        }

        let (start, end) = self.clock.day_range(date)?;
        let records = self.calendar.list_records(start, end).await?;
        let window = resolve_window(&records).ok_or(ShiftError::NoWindowDefined)?;
        if !window.contains(hour) {
            return Err(ShiftError::OutsideWindow(hour));
        }
        Ok(records)
    }
}
