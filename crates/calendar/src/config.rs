//! Spine configuration and capacity validation.

use chrono::NaiveDate;

use crate::error::SpineError;
use crate::sequence::days_in_range;
use crate::week::WeekStart;

/// Maximum number of days a single spine can enumerate (2^12).
///
/// The ceiling is contractual: a range beyond it is rejected up front
/// rather than silently truncated.
pub const SPINE_CAPACITY_DAYS: i64 = 4096;

/// Configuration for spine generation: the inclusive date range and the
/// week-start convention applied to the `week_*` field family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpineConfig {
    start_date: NaiveDate,
    end_date: NaiveDate,
    week_start: WeekStart,
}

impl Default for SpineConfig {
    fn default() -> Self {
        Self {
            // 2020-01-01 through 2030-12-31: 4018 days.
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("literal date is valid"),
            end_date: NaiveDate::from_ymd_opt(2030, 12, 31).expect("literal date is valid"),
            week_start: WeekStart::default(),
        }
    }
}

impl SpineConfig {
    /// Sets the inclusive start date.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    /// Sets the inclusive end date.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = date;
        self
    }

    /// Sets the week-start convention.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Returns the inclusive start date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the inclusive end date.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the week-start convention.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Validates the configuration and returns the spine row count.
    ///
    /// An inverted range (`end_date < start_date`) is valid and yields zero
    /// rows. A range longer than [`SPINE_CAPACITY_DAYS`] is a configuration
    /// error, reported before any row is generated.
    ///
    /// # Errors
    ///
    /// Returns [`SpineError::CapacityExceeded`] if the range holds more than
    /// [`SPINE_CAPACITY_DAYS`] days.
    pub fn validate(&self) -> Result<i64, SpineError> {
        let requested = days_in_range(self.start_date, self.end_date);
        if requested > SPINE_CAPACITY_DAYS {
            return Err(SpineError::CapacityExceeded {
                requested,
                capacity: SPINE_CAPACITY_DAYS,
            });
        }
        Ok(requested)
    }
}
