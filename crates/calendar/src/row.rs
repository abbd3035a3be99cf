//! Per-day calendar attribute derivation.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::SpineError;
use crate::sequence::offset_days;
use crate::week::WeekStart;

/// Long and short month names, indexed by `month - 1`.
const MONTH_NAMES: [(&str, &str); 12] = [
    ("January", "Jan"),
    ("February", "Feb"),
    ("March", "Mar"),
    ("April", "Apr"),
    ("May", "May"),
    ("June", "Jun"),
    ("July", "Jul"),
    ("August", "Aug"),
    ("September", "Sep"),
    ("October", "Oct"),
    ("November", "Nov"),
    ("December", "Dec"),
];

/// Long and short day names, indexed by `iso_day_number - 1` (Monday first).
const DAY_NAMES: [(&str, &str); 7] = [
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
    ("Saturday", "Sat"),
    ("Sunday", "Sun"),
];

/// One spine row: a calendar day and every attribute derived from it.
///
/// Each field is a pure function of `date_day` and the week-start
/// convention; no field depends on any other row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpineRow {
    pub date_day: NaiveDate,
    pub prior_date_day: NaiveDate,
    pub next_date_day: NaiveDate,
    /// Same month/day one calendar year earlier (Feb 29 clamps to Feb 28).
    pub prior_year_date_day: NaiveDate,
    /// Exactly 364 days earlier, preserving day-of-week alignment.
    pub prior_year_over_year_date_day: NaiveDate,
    pub day_of_week: u8,
    pub day_of_week_iso: u8,
    pub day_of_week_name: &'static str,
    pub day_of_week_name_short: &'static str,
    pub day_of_month: u8,
    pub day_of_year: u16,
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub prior_year_week_start_date: NaiveDate,
    pub prior_year_week_end_date: NaiveDate,
    pub week_of_year: u8,
    pub iso_week_start_date: NaiveDate,
    pub iso_week_end_date: NaiveDate,
    pub iso_week_of_year: u8,
    pub prior_year_week_of_year: u8,
    pub month_of_year: u8,
    pub month_name: &'static str,
    pub month_name_short: &'static str,
    pub month_start_date: NaiveDate,
    pub month_end_date: NaiveDate,
    pub prior_year_month_start_date: NaiveDate,
    pub prior_year_month_end_date: NaiveDate,
    pub quarter_of_year: u8,
    pub quarter_start_date: NaiveDate,
    pub quarter_end_date: NaiveDate,
    pub year_number: i32,
    pub year_start_date: NaiveDate,
    pub year_end_date: NaiveDate,
}

impl SpineRow {
    /// Derives every calendar attribute for `date_day`.
    ///
    /// Pure arithmetic: no I/O, no shared state, deterministic for a given
    /// date and convention.
    ///
    /// # Errors
    ///
    /// Returns [`SpineError::DateOutOfRange`] only when a derived date would
    /// leave the representable calendar range (possible within a few days of
    /// `NaiveDate::MIN`/`MAX`).
    pub fn derive(date_day: NaiveDate, week_start: WeekStart) -> Result<Self, SpineError> {
        let out_of_range = || SpineError::DateOutOfRange {
            year: date_day.year(),
        };

        let prior_date_day = offset_days(date_day, -1).ok_or_else(out_of_range)?;
        let next_date_day = offset_days(date_day, 1).ok_or_else(out_of_range)?;
        let prior_year_date_day = prior_year_same_day(date_day)?;
        let prior_year_over_year_date_day = offset_days(date_day, -364).ok_or_else(out_of_range)?;

        let (day_of_week_name, day_of_week_name_short) =
            DAY_NAMES[(date_day.weekday().num_days_from_monday()) as usize];
        let month_of_year = date_day.month() as u8;
        let (month_name, month_name_short) = MONTH_NAMES[(month_of_year - 1) as usize];

        let month_start_date = month_start(date_day)?;
        let month_end_date = month_end(date_day)?;
        let prior_year_month_start_date = month_start(prior_year_date_day)?;
        let prior_year_month_end_date = month_end(prior_year_date_day)?;

        let quarter_of_year = (month_of_year - 1) / 3 + 1;
        let (quarter_start_date, quarter_end_date) = quarter_bounds(date_day)?;

        let year_number = date_day.year();
        let year_start_date = ymd(year_number, 1, 1)?;
        let year_end_date = ymd(year_number, 12, 31)?;

        Ok(Self {
            date_day,
            prior_date_day,
            next_date_day,
            prior_year_date_day,
            prior_year_over_year_date_day,
            day_of_week: week_start.day_number(date_day),
            day_of_week_iso: date_day.weekday().number_from_monday() as u8,
            day_of_week_name,
            day_of_week_name_short,
            day_of_month: date_day.day() as u8,
            day_of_year: date_day.ordinal() as u16,
            week_start_date: week_start.week_start_of(date_day)?,
            week_end_date: week_start.week_end_of(date_day)?,
            prior_year_week_start_date: week_start.week_start_of(prior_year_over_year_date_day)?,
            prior_year_week_end_date: week_start.week_end_of(prior_year_over_year_date_day)?,
            week_of_year: week_start.week_of_year(date_day),
            iso_week_start_date: WeekStart::IsoMonday.week_start_of(date_day)?,
            iso_week_end_date: WeekStart::IsoMonday.week_end_of(date_day)?,
            iso_week_of_year: WeekStart::IsoMonday.week_of_year(date_day),
            prior_year_week_of_year: week_start.week_of_year(prior_year_over_year_date_day),
            month_of_year,
            month_name,
            month_name_short,
            month_start_date,
            month_end_date,
            prior_year_month_start_date,
            prior_year_month_end_date,
            quarter_of_year,
            quarter_start_date,
            quarter_end_date,
            year_number,
            year_start_date,
            year_end_date,
        })
    }
}

/// Fallible `from_ymd`, mapping out-of-range to [`SpineError::DateOutOfRange`].
fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, SpineError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(SpineError::DateOutOfRange { year })
}

/// Same month/day one calendar year earlier; Feb 29 clamps to Feb 28 when
/// the target year is not a leap year.
fn prior_year_same_day(date: NaiveDate) -> Result<NaiveDate, SpineError> {
    let year = date.year() - 1;
    match date.with_year(year) {
        Some(d) => Ok(d),
        None => ymd(year, 2, 28),
    }
}

/// First day of `date`'s month.
fn month_start(date: NaiveDate) -> Result<NaiveDate, SpineError> {
    ymd(date.year(), date.month(), 1)
}

/// Last day of `date`'s month: start of the next month minus one day, so
/// variable month lengths and leap years need no special casing.
fn month_end(date: NaiveDate) -> Result<NaiveDate, SpineError> {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    ymd(next_year, next_month, 1)?
        .pred_opt()
        .ok_or(SpineError::DateOutOfRange { year: next_year })
}

/// First and last day of `date`'s quarter; the end is the start of the next
/// quarter minus one day.
fn quarter_bounds(date: NaiveDate) -> Result<(NaiveDate, NaiveDate), SpineError> {
    let quarter = (date.month() - 1) / 3;
    let start = ymd(date.year(), quarter * 3 + 1, 1)?;
    let (next_year, next_month) = if quarter == 3 {
        (date.year() + 1, 1)
    } else {
        (date.year(), (quarter + 1) * 3 + 1)
    };
    let end = ymd(next_year, next_month, 1)?
        .pred_opt()
        .ok_or(SpineError::DateOutOfRange { year: next_year })?;
    Ok((start, end))
}
