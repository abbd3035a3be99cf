//! Week-start convention behavior across the spine.

use chrono::{Duration, NaiveDate};
use timespine_calendar::{SpineConfig, WeekStart, build_spine};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn iso_monday_week_family_equals_iso_family() {
    let config = SpineConfig::default()
        .with_start_date(ymd(2020, 12, 1))
        .with_end_date(ymd(2021, 1, 31))
        .with_week_start(WeekStart::IsoMonday);
    for row in build_spine(&config).unwrap() {
        assert_eq!(row.week_start_date, row.iso_week_start_date);
        assert_eq!(row.week_end_date, row.iso_week_end_date);
        assert_eq!(row.week_of_year, row.iso_week_of_year);
        assert_eq!(row.day_of_week, row.day_of_week_iso);
    }
}

#[test]
fn sunday_weeks_start_sunday_and_keep_iso_fields() {
    let config = SpineConfig::default()
        .with_start_date(ymd(2024, 3, 1))
        .with_end_date(ymd(2024, 3, 31))
        .with_week_start(WeekStart::Sunday);
    for row in build_spine(&config).unwrap() {
        // Sunday-start weeks: day 1 is Sunday, the start date is a Sunday.
        assert_eq!(
            row.week_start_date.format("%a").to_string(),
            "Sun",
            "week start {} is not a Sunday",
            row.week_start_date
        );
        assert_eq!(row.week_end_date, row.week_start_date + Duration::days(6));
        assert!(row.week_start_date <= row.date_day && row.date_day <= row.week_end_date);
        // ISO family is unaffected by the convention.
        assert_eq!(
            row.iso_week_start_date.format("%a").to_string(),
            "Mon",
            "iso week start {} is not a Monday",
            row.iso_week_start_date
        );
    }
}

#[test]
fn conventions_only_change_the_week_family() {
    let base = SpineConfig::default()
        .with_start_date(ymd(2024, 3, 1))
        .with_end_date(ymd(2024, 3, 31));
    let iso = build_spine(&base.with_week_start(WeekStart::IsoMonday)).unwrap();
    let sunday = build_spine(&base.with_week_start(WeekStart::Sunday)).unwrap();
    for (a, b) in iso.iter().zip(&sunday) {
        assert_eq!(a.date_day, b.date_day);
        assert_eq!(a.month_end_date, b.month_end_date);
        assert_eq!(a.quarter_start_date, b.quarter_start_date);
        assert_eq!(a.prior_year_date_day, b.prior_year_date_day);
        assert_eq!(a.iso_week_of_year, b.iso_week_of_year);
    }
}
