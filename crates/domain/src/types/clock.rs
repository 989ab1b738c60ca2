//! Civil-time arithmetic in the configured zone
//!
//! Every day and hour the engine talks about is a civil day/hour in one fixed
//! IANA zone. Store ranges are produced as offset-carrying instants so the
//! adapter never needs to know the zone.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, LocalResult, NaiveDate, TimeZone, Timelike,
};
use chrono_tz::Tz;

use crate::config::ScheduleConfig;
use crate::constants::SHIFT_LENGTH_HOURS;
use crate::errors::{Result, ShiftError};

/// Converts between civil (date, hour) pairs and store instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftClock {
    tz: Tz,
}

impl ShiftClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// # Errors
    /// Returns `ShiftError::Config` for an unknown zone name.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self> {
        Ok(Self::new(config.tz()?))
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// `[00:00 of date, 00:00 of the next day)` in the zone.
    pub fn day_range(&self, date: NaiveDate) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let next = date
            .succ_opt()
            .ok_or_else(|| ShiftError::InvalidInput(format!("date out of range: {date}")))?;
        Ok((self.start_of_day(date)?, self.start_of_day(next)?))
    }

    /// `[date hour:00, +1h)` in the zone.
    ///
    /// # Errors
    /// `InvalidInput` when the hour is not in `0..24` or does not exist on that
    /// date (spring-forward gap).
    pub fn hour_range(
        &self,
        date: NaiveDate,
        hour: u32,
    ) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let naive = date
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| ShiftError::InvalidInput(format!("hour must be in 0..24, got {hour}")))?;
        let start = match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            // Repeated hour on fall-back: the first occurrence is the slot.
            LocalResult::Ambiguous(first, _) => first,
            LocalResult::None => {
                return Err(ShiftError::InvalidInput(format!(
                    "{date} {hour:02}:00 does not exist in {}",
                    self.tz
                )))
            }
        };
        let start = start.fixed_offset();
        Ok((start, start + Duration::hours(SHIFT_LENGTH_HOURS)))
    }

    /// From the first day of the month to the first day of the next month.
    pub fn month_range(
        &self,
        year: i32,
        month: u32,
    ) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ShiftError::InvalidInput(format!("invalid month: {year}-{month}")))?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| ShiftError::InvalidInput(format!("invalid month: {year}-{month}")))?;
        Ok((self.start_of_day(first)?, self.start_of_day(next)?))
    }

    /// Civil date and hour of an instant, only when it falls exactly on the hour.
    pub fn slot_position(&self, instant: &DateTime<FixedOffset>) -> Option<(NaiveDate, u32)> {
        let local = instant.with_timezone(&self.tz);
        if local.minute() != 0 || local.second() != 0 || local.nanosecond() != 0 {
            return None;
        }
        Some((local.date_naive(), local.hour()))
    }

    /// Civil date of an instant in the zone.
    pub fn local_date(&self, instant: &DateTime<FixedOffset>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Days of the given month, in order.
    pub fn days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        first.iter_days().take_while(|day| day.month() == month).collect()
    }

    fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<FixedOffset>> {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            ShiftError::InvalidInput(format!("date out of range: {date}"))
        })?;
        self.tz
            .from_local_datetime(&midnight)
            .earliest()
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| ShiftError::InvalidInput(format!("{date} has no midnight in {}", self.tz)))
    }
}

impl Default for ShiftClock {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::Warsaw)
    }
}
