//! Week-start conventions: boundaries, day numbering, and week-of-year.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::SpineError;

/// First-day-of-week convention for the `week_*` field family.
///
/// The `iso_week_*` fields are always ISO (Monday-start, week 1 contains the
/// year's first Thursday) regardless of this setting. Under
/// [`WeekStart::IsoMonday`] the two families are numerically identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeekStart {
    /// ISO convention: weeks start Monday, ISO week numbering.
    #[default]
    IsoMonday,
    /// US convention: weeks start Sunday, week 1 is the week containing
    /// January 1.
    Sunday,
}

impl WeekStart {
    /// Returns the number of days from the week's first day to `date`
    /// (0 when `date` is the first day of its week).
    fn days_from_week_start(self, date: NaiveDate) -> i64 {
        match self {
            Self::IsoMonday => i64::from(date.weekday().num_days_from_monday()),
            Self::Sunday => i64::from(date.weekday().num_days_from_sunday()),
        }
    }

    /// Returns the day number within the week, 1..=7, counted from this
    /// convention's first day.
    pub fn day_number(self, date: NaiveDate) -> u8 {
        (self.days_from_week_start(date) + 1) as u8
    }

    /// Returns the first day of the week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`SpineError::DateOutOfRange`] if the week start would fall
    /// before the representable calendar range.
    pub fn week_start_of(self, date: NaiveDate) -> Result<NaiveDate, SpineError> {
        date.checked_sub_signed(Duration::days(self.days_from_week_start(date)))
            .ok_or(SpineError::DateOutOfRange { year: date.year() })
    }

    /// Returns the last day of the week containing `date` (start + 6 days).
    ///
    /// # Errors
    ///
    /// Returns [`SpineError::DateOutOfRange`] if the week end would fall
    /// after the representable calendar range.
    pub fn week_end_of(self, date: NaiveDate) -> Result<NaiveDate, SpineError> {
        self.week_start_of(date)?
            .checked_add_signed(Duration::days(6))
            .ok_or(SpineError::DateOutOfRange { year: date.year() })
    }

    /// Returns the week-of-year number for `date` under this convention.
    ///
    /// ISO numbering can attribute a date to the adjacent year's week 1 or
    /// week 52/53; the US numbering always counts within the calendar year,
    /// so late-December dates can reach week 54 in some leap years.
    pub fn week_of_year(self, date: NaiveDate) -> u8 {
        match self {
            Self::IsoMonday => date.iso_week().week() as u8,
            Self::Sunday => {
                let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1)
                    .expect("January 1 exists for every representable year");
                let offset = jan1.weekday().num_days_from_sunday();
                ((date.ordinal() - 1 + offset) / 7 + 1) as u8
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_is_iso_monday() {
        assert_eq!(WeekStart::default(), WeekStart::IsoMonday);
    }

    #[test]
    fn day_number_iso() {
        // 2024-03-04 is a Monday.
        assert_eq!(WeekStart::IsoMonday.day_number(ymd(2024, 3, 4)), 1);
        assert_eq!(WeekStart::IsoMonday.day_number(ymd(2024, 3, 10)), 7);
    }

    #[test]
    fn day_number_sunday() {
        // 2024-03-10 is a Sunday.
        assert_eq!(WeekStart::Sunday.day_number(ymd(2024, 3, 10)), 1);
        assert_eq!(WeekStart::Sunday.day_number(ymd(2024, 3, 4)), 2);
        assert_eq!(WeekStart::Sunday.day_number(ymd(2024, 3, 9)), 7);
    }

    #[test]
    fn week_start_iso_monday() {
        let start = WeekStart::IsoMonday.week_start_of(ymd(2024, 3, 10)).unwrap();
        assert_eq!(start, ymd(2024, 3, 4));
        // A Monday is its own week start.
        let monday = WeekStart::IsoMonday.week_start_of(ymd(2024, 3, 4)).unwrap();
        assert_eq!(monday, ymd(2024, 3, 4));
    }

    #[test]
    fn week_start_sunday() {
        let start = WeekStart::Sunday.week_start_of(ymd(2024, 3, 10)).unwrap();
        assert_eq!(start, ymd(2024, 3, 10));
        let mid_week = WeekStart::Sunday.week_start_of(ymd(2024, 3, 13)).unwrap();
        assert_eq!(mid_week, ymd(2024, 3, 10));
    }

    #[test]
    fn week_end_is_start_plus_six() {
        for convention in [WeekStart::IsoMonday, WeekStart::Sunday] {
            let date = ymd(2024, 3, 7);
            let start = convention.week_start_of(date).unwrap();
            let end = convention.week_end_of(date).unwrap();
            assert_eq!(end, start + Duration::days(6));
            assert!(start <= date && date <= end);
        }
    }

    #[test]
    fn week_spans_year_boundary() {
        // 2024-12-31 is a Tuesday; its ISO week runs 2024-12-30..2025-01-05.
        let start = WeekStart::IsoMonday.week_start_of(ymd(2024, 12, 31)).unwrap();
        let end = WeekStart::IsoMonday.week_end_of(ymd(2024, 12, 31)).unwrap();
        assert_eq!(start, ymd(2024, 12, 30));
        assert_eq!(end, ymd(2025, 1, 5));
    }

    #[test]
    fn iso_week_of_year() {
        // January 4 is always in ISO week 1.
        assert_eq!(WeekStart::IsoMonday.week_of_year(ymd(2021, 1, 4)), 1);
        assert_eq!(WeekStart::IsoMonday.week_of_year(ymd(2024, 1, 4)), 1);
        // 2021-01-01 is a Friday, attributed to week 53 of 2020.
        assert_eq!(WeekStart::IsoMonday.week_of_year(ymd(2021, 1, 1)), 53);
        // 2024-03-10 closes ISO week 10.
        assert_eq!(WeekStart::IsoMonday.week_of_year(ymd(2024, 3, 10)), 10);
    }

    #[test]
    fn us_week_of_year() {
        // 2024-01-01 is a Monday; the Sunday-start week 1 runs Jan 1..Jan 6.
        assert_eq!(WeekStart::Sunday.week_of_year(ymd(2024, 1, 1)), 1);
        assert_eq!(WeekStart::Sunday.week_of_year(ymd(2024, 1, 6)), 1);
        // Jan 7 is a Sunday, starting week 2.
        assert_eq!(WeekStart::Sunday.week_of_year(ymd(2024, 1, 7)), 2);
        // US numbering never attributes a date to the adjacent year.
        assert_eq!(WeekStart::Sunday.week_of_year(ymd(2021, 1, 1)), 1);
    }

    #[test]
    fn conventions_agree_on_iso_monday() {
        // Under IsoMonday the week numbering is exactly chrono's ISO week;
        // spot-check boundaries around a year transition.
        for date in [ymd(2020, 12, 28), ymd(2021, 1, 1), ymd(2021, 1, 4)] {
            assert_eq!(
                WeekStart::IsoMonday.week_of_year(date),
                date.iso_week().week() as u8
            );
            assert_eq!(
                WeekStart::IsoMonday.day_number(date),
                date.weekday().number_from_monday() as u8
            );
        }
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<WeekStart>();
    }
}
