//! Contiguous date sequence generation.

use chrono::{Duration, NaiveDate};

/// Returns the number of days in the inclusive range `[start, end]`,
/// or 0 when `end < start`.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        0
    } else {
        end.signed_duration_since(start).num_days() + 1
    }
}

/// Generates every calendar day in the inclusive range `[start, end]`,
/// ascending, with no gaps or duplicates.
///
/// An inverted range (`end < start`) yields an empty sequence, not an error.
pub fn date_sequence(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let n_days = days_in_range(start, end);
    let mut dates = Vec::with_capacity(n_days as usize);
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Returns `date + offset` days, if representable.
pub(crate) fn offset_days(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(offset))
}
