use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{Error, Result};
use crate::types::{DstWindow, Language};

/// Origin of the day offset: 2000-01-01 13:00 on the naive clock. The hour
/// is 13 rather than 12 because the clock runs one hour ahead of UT.
/// Evaluated at compile time, so the panic arms can only fail the build.
pub const REFERENCE_EPOCH: NaiveDateTime = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => match date.and_hms_opt(13, 0, 0) {
        Some(epoch) => epoch,
        None => panic!("epoch time out of range"),
    },
    None => panic!("epoch date out of range"),
};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

const COMPASS_EN: [&str; 9] = [
    "North", "North-East", "East", "South-East", "South",
    "South-West", "West", "North-West", "North",
];

const COMPASS_DE: [&str; 9] = [
    "Nord", "Nord-Ost", "Ost", "Süd-Ost", "Süd",
    "Süd-West", "West", "Nord-West", "Nord",
];

/// Continuous days elapsed since [`REFERENCE_EPOCH`]; the fraction encodes time of day.
pub fn day_offset(instant: NaiveDateTime) -> f64 {
    (instant - REFERENCE_EPOCH).num_milliseconds() as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// Instant a fractional number of days after `instant`, rounded to the millisecond.
pub fn add_days(instant: NaiveDateTime, days: f64) -> NaiveDateTime {
    instant + Duration::milliseconds((days * SECONDS_PER_DAY * 1000.0).round() as i64)
}

pub fn date_time(year: i32, month: u32, day: u32, hour: u32) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .ok_or(Error::InvalidDate { year, month, day })
}

pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDateTime> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    date_time(year, month, 1, 0)
}

pub fn last_sunday(year: i32, month: u32) -> Result<NaiveDate> {
    let first_of_next = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    let mut day = first_of_next.date() - Duration::days(1);
    while day.weekday() != Weekday::Sun {
        day -= Duration::days(1);
    }
    Ok(day)
}

impl DstWindow {
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Window between the last Sundays of March and October, both at 00:00.
    pub fn central_european(year: i32) -> Result<Self> {
        let start = last_sunday(year, 3)?;
        let end = last_sunday(year, 10)?;
        Ok(Self {
            start: start.and_time(chrono::NaiveTime::MIN),
            end: end.and_time(chrono::NaiveTime::MIN),
        })
    }

    /// Exclusive at both ends.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start < instant && instant < self.end
    }

    pub fn shift(&self, instant: NaiveDateTime) -> NaiveDateTime {
        if self.contains(instant) {
            instant - Duration::hours(1)
        } else {
            instant
        }
    }
}

/// Applies the optional daylight-saving correction.
pub fn to_standard_time(instant: NaiveDateTime, dst: Option<&DstWindow>) -> NaiveDateTime {
    dst.map_or(instant, |window| window.shift(instant))
}

pub fn month_name(month: u32, language: Language) -> Option<&'static str> {
    let names = match language {
        Language::English => &MONTHS_EN,
        Language::German => &MONTHS_DE,
    };
    names.get(month.checked_sub(1)? as usize).copied()
}

/// Tick label for azimuth `index * 45` degrees, index 0..=8.
pub fn compass_label(index: usize, language: Language) -> Option<&'static str> {
    match language {
        Language::English => COMPASS_EN.get(index).copied(),
        Language::German => COMPASS_DE.get(index).copied(),
    }
}
