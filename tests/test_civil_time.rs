use chrono::{Datelike, Duration, NaiveDate, Offset, TimeZone, Weekday};
use chrono_tz::Europe::Berlin;

use sunpath::civil_time::*;
use sunpath::error::Error;
use sunpath::types::{DstWindow, Language};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Reference epoch and day offset ──

#[test]
fn test_reference_epoch() {
    assert_eq!(REFERENCE_EPOCH, date_time(2000, 1, 1, 13).unwrap());
    assert_eq!(day_offset(REFERENCE_EPOCH), 0.0);
}

#[test]
fn test_day_offset_fractional() {
    assert_approx!(day_offset(date_time(2000, 1, 2, 1).unwrap()), 0.5, 1e-12);
    assert_approx!(day_offset(date_time(2000, 1, 1, 7).unwrap()), -0.25, 1e-12);
    assert_approx!(day_offset(date_time(2023, 3, 26, 0).unwrap()), 8484.458333333, 1e-8);
}

#[test]
fn test_add_days() {
    let start = date_time(2023, 1, 1, 0).unwrap();
    assert_eq!(add_days(start, 0.01), start + Duration::seconds(864));
    assert_eq!(add_days(start, 1.0 / 24.0), start + Duration::hours(1));
    assert_eq!(add_days(start, -1.0), date_time(2022, 12, 31, 0).unwrap());
    assert_approx!(day_offset(add_days(start, 0.37)) - day_offset(start), 0.37, 1e-9);
}

// ── Calendar helpers ──

#[test]
fn test_invalid_dates_are_errors() {
    assert!(matches!(
        date_time(2023, 2, 30, 0),
        Err(Error::InvalidDate { year: 2023, month: 2, day: 30 })
    ));
    assert!(matches!(first_of_month(2023, 13), Err(Error::InvalidMonth(13))));
    assert!(matches!(first_of_month(2023, 0), Err(Error::InvalidMonth(0))));
}

#[test]
fn test_last_sunday_known_dates() {
    let cases: &[(i32, u32, (i32, u32, u32))] = &[
        (2023, 3, (2023, 3, 26)),
        (2023, 10, (2023, 10, 29)),
        (2024, 3, (2024, 3, 31)),
        (2024, 10, (2024, 10, 27)),
        (2025, 3, (2025, 3, 30)),
        (2023, 12, (2023, 12, 31)),
    ];
    for &(year, month, (y, m, d)) in cases {
        let day = last_sunday(year, month).unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(day.weekday(), Weekday::Sun);
    }
}

// ── DST window ──

#[test]
fn test_central_european_2023() {
    let window = DstWindow::central_european(2023).unwrap();
    assert_eq!(window.start, date_time(2023, 3, 26, 0).unwrap());
    assert_eq!(window.end, date_time(2023, 10, 29, 0).unwrap());
}

#[test]
fn test_central_european_matches_tz_database() {
    for year in 2000..2037 {
        let window = DstWindow::central_european(year).unwrap();
        for (date, summer_from) in [(window.start.date(), true), (window.end.date(), false)] {
            let noon = |d: NaiveDate| d.and_hms_opt(12, 0, 0).unwrap();
            let offset = |d: NaiveDate| {
                Berlin.offset_from_utc_datetime(&noon(d)).fix().local_minus_utc()
            };
            let (before, on) = if summer_from { (3600, 7200) } else { (7200, 3600) };
            assert_eq!(offset(date - Duration::days(1)), before, "{} day before", date);
            assert_eq!(offset(date), on, "{}", date);
        }
    }
}

#[test]
fn test_start_boundary_not_shifted() {
    let window = DstWindow::central_european(2023).unwrap();
    assert!(!window.contains(window.start));
    assert_eq!(window.shift(window.start), window.start);
}

#[test]
fn test_one_second_after_start_shifted() {
    let window = DstWindow::central_european(2023).unwrap();
    let t = window.start + Duration::seconds(1);
    assert!(window.contains(t));
    assert_eq!(window.shift(t), t - Duration::hours(1));
}

#[test]
fn test_end_boundary_not_shifted() {
    let window = DstWindow::central_european(2023).unwrap();
    assert!(!window.contains(window.end));
    assert_eq!(window.shift(window.end), window.end);
    let t = window.end - Duration::seconds(1);
    assert_eq!(window.shift(t), t - Duration::hours(1));
}

#[test]
fn test_shift_changes_day_offset_by_one_hour() {
    let window = DstWindow::central_european(2023).unwrap();
    let t = date_time(2023, 7, 1, 12).unwrap();
    let diff = day_offset(t) - day_offset(to_standard_time(t, Some(&window)));
    assert_approx!(diff, 1.0 / 24.0, 1e-9);
    assert_eq!(to_standard_time(t, None), t);
}

#[test]
fn test_custom_window() {
    let window = DstWindow::new(
        date_time(2030, 4, 1, 2).unwrap(),
        date_time(2030, 4, 2, 2).unwrap(),
    );
    assert!(window.contains(date_time(2030, 4, 1, 12).unwrap()));
    assert!(!window.contains(date_time(2030, 4, 3, 0).unwrap()));
}

// ── Names ──

#[test]
fn test_month_names() {
    assert_eq!(month_name(1, Language::English), Some("January"));
    assert_eq!(month_name(3, Language::German), Some("März"));
    assert_eq!(month_name(12, Language::German), Some("Dezember"));
    assert_eq!(month_name(0, Language::English), None);
    assert_eq!(month_name(13, Language::English), None);
}

#[test]
fn test_compass_labels() {
    let english: Vec<_> = (0..9).filter_map(|i| compass_label(i, Language::English)).collect();
    assert_eq!(
        english,
        [
            "North", "North-East", "East", "South-East", "South",
            "South-West", "West", "North-West", "North",
        ]
    );
    assert_eq!(compass_label(4, Language::German), Some("Süd"));
    assert_eq!(compass_label(9, Language::English), None);
}
