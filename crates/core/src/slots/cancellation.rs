//! Cancellation coordinator

use std::sync::Arc;

use chrono::NaiveDate;
use shiftslot_domain::{
    encode_slot, CancellationKind, CancellationOutcome, Directory, NoticeKind, Occupant, Result,
    ShiftClock, ShiftError, ShiftNotice,
};
use tracing::{info, warn};

use super::identity::resolve_occupancy;
use super::slot_records;
use crate::cache::DayRecordsCache;
use crate::calendar_ports::CalendarStore;
use crate::directory::ports::DirectoryStore;
use crate::notifications::NotificationDispatcher;

/// Removes the viewer from a slot, deleting or rewriting the record
pub struct CancellationCoordinator {
    calendar: Arc<dyn CalendarStore>,
    directory: Arc<dyn DirectoryStore>,
    notifications: NotificationDispatcher,
    clock: ShiftClock,
    cache: Option<DayRecordsCache>,
}

impl CancellationCoordinator {
    pub fn new(
        calendar: Arc<dyn CalendarStore>,
        directory: Arc<dyn DirectoryStore>,
        notifications: NotificationDispatcher,
        clock: ShiftClock,
    ) -> Self {
        Self { calendar, directory, notifications, clock, cache: None }
    }

    pub fn with_cache(mut self, cache: DayRecordsCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Take `viewer` out of the slot at `hour`.
    ///
    /// An organizer with a partner either hands the slot over to the partner
    /// or, with `delete_entirely`, removes it for both.
    ///
    /// # Errors
    /// - `NotFound` when the viewer holds no slot at that hour
    /// - `Conflict` when the write fails; refresh and decide again
    /// - `StoreUnavailable` when reading fails
    pub async fn cancel(
        &self,
        date: NaiveDate,
        hour: u32,
        viewer: &str,
        delete_entirely: bool,
    ) -> Result<CancellationOutcome> {
        let directory = Directory::from_entries(self.directory.load_all().await?);
        let (start, end) = self.clock.hour_range(date, hour)?;
        let records = self.calendar.list_records(start, end).await?;

        let (record, occupancy, position) = slot_records(&records, self.clock, date)
            .filter(|(slot_hour, _)| *slot_hour == hour)
            .find_map(|(_, record)| {
                let occupancy = resolve_occupancy(record, &directory);
                occupancy.position_of(viewer).map(|position| (record, occupancy, position))
            })
            .ok_or(ShiftError::NotFound)?;

        let actor = occupancy.occupants[position].display_name.clone();
        let mut remaining: Vec<Occupant> = occupancy.occupants.clone();
        remaining.remove(position);

        let (kind, notice) = if remaining.is_empty() || (position == 0 && delete_entirely) {
            self.calendar.delete_record(&record.id).await.map_err(|err| {
                warn!(error = %err, record_id = %record.id, "Delete failed");
                ShiftError::Conflict
            })?;
            let notice = remaining.first().cloned().map(|o| (o, NoticeKind::SlotCancelled));
            (CancellationKind::Deleted, notice)
        } else {
            let encoded = encode_slot(&remaining);
            self.calendar.update_record(&record.id, &encoded.title, &encoded.body).await.map_err(
                |err| {
                    warn!(error = %err, record_id = %record.id, "Withdraw write failed");
                    ShiftError::Conflict
                },
            )?;

            if position == 0 {
                let notice = remaining.first().cloned().map(|o| (o, NoticeKind::OrganizerWithdrew));
                (CancellationKind::PartnerPromoted, notice)
            } else {
                let notice = occupancy.organizer().cloned().map(|o| (o, NoticeKind::PartnerWithdrew));
                (CancellationKind::Withdrew, notice)
            }
        };

        info!(%date, hour, viewer = %actor, kind = ?kind, record_id = %record.id, "Slot cancelled");

        if let Some(cache) = &self.cache {
            cache.invalidate(date);
        }

        if let Some((occupant, notice_kind)) = notice {
            if let Some(email) = occupant.email() {
                self.notifications
                    .dispatch(ShiftNotice {
                        kind: notice_kind,
                        recipient: email.to_string(),
                        actor: actor.clone(),
                        date,
                        hour,
                    })
                    .await;
            }
        }

        Ok(CancellationOutcome { record_id: record.id.clone(), kind })
    }
}
