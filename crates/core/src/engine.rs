//! Wiring of all services over one set of ports

use std::sync::Arc;

use chrono::NaiveDate;
use shiftslot_domain::{
    BookingOutcome, CancellationOutcome, DayAvailability, EngineConfig, Result, ShiftClock,
    ShiftSummary,
};

use crate::cache::DayRecordsCache;
use crate::calendar_ports::CalendarStore;
use crate::directory::{DirectoryService, DirectoryStore};
use crate::notifications::{NotificationDispatcher, Notifier};
use crate::schedule::ScheduleService;
use crate::slots::{AvailabilityService, BookingCoordinator, CancellationCoordinator};

/// Facade holding every engine service, sharing one cache and clock.
pub struct ShiftEngine {
    availability: AvailabilityService,
    booking: BookingCoordinator,
    cancellation: CancellationCoordinator,
    schedule: ScheduleService,
    directory: DirectoryService,
    cache: DayRecordsCache,
}

impl ShiftEngine {
    /// Build the services from configuration and ports.
    ///
    /// # Errors
    /// `Config` when the configured time zone is unknown.
    pub fn new(
        config: &EngineConfig,
        calendar: Arc<dyn CalendarStore>,
        directory: Arc<dyn DirectoryStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let clock = ShiftClock::from_config(&config.schedule)?;
        let cache = DayRecordsCache::from_config(&config.cache);
        let notifications = NotificationDispatcher::new(notifier);

        Ok(Self {
            availability: AvailabilityService::new(Arc::clone(&calendar), Arc::clone(&directory), clock)
                .with_cache(cache.clone()),
            booking: BookingCoordinator::new(
                Arc::clone(&calendar),
                Arc::clone(&directory),
                notifications.clone(),
                clock,
            )
            .with_window_enforcement(config.booking.enforce_window)
            .with_cache(cache.clone()),
            cancellation: CancellationCoordinator::new(
                Arc::clone(&calendar),
                Arc::clone(&directory),
                notifications,
                clock,
            )
            .with_cache(cache.clone()),
            schedule: ScheduleService::new(calendar, Arc::clone(&directory), clock),
            directory: DirectoryService::new(directory),
            cache,
        })
    }

    pub async fn day_availability(&self, date: NaiveDate, viewer: &str) -> Result<DayAvailability> {
        self.availability.day_availability(date, viewer).await
    }

    pub async fn book(
        &self,
        date: NaiveDate,
        hour: u32,
        viewer: &str,
        partner: Option<&str>,
    ) -> Result<BookingOutcome> {
        self.booking.book(date, hour, viewer, partner).await
    }

    pub async fn cancel(
        &self,
        date: NaiveDate,
        hour: u32,
        viewer: &str,
        delete_entirely: bool,
    ) -> Result<CancellationOutcome> {
        self.cancellation.cancel(date, hour, viewer, delete_entirely).await
    }

    pub async fn shifts_for_month(&self, year: i32, month: u32, viewer: &str) -> Result<Vec<ShiftSummary>> {
        self.schedule.shifts_for_month(year, month, viewer).await
    }

    pub fn directory(&self) -> &DirectoryService {
        &self.directory
    }

    /// Day records cache shared by every service; invalidate it after edits
    /// made outside the engine.
    pub fn cache(&self) -> &DayRecordsCache {
        &self.cache
    }
}
