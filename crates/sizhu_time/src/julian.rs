//! Julian Date ↔ calendar conversions.
//!
//! Algorithms from Meeus, "Astronomical Algorithms" (2nd ed.), chapter 7.
//! Implementation is original.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

/// J2000.0 epoch as Julian Date (2000-Jan-01 12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day` may be fractional (e.g. 1.5 = noon on the 1st).
/// Valid for dates after 1582-Oct-15 (Gregorian calendar adoption).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = y / 100;
    let b = 2 - a + a / 4;

    let jd_int = (365.25 * (f64::from(y) + 4716.0)).floor();
    let jd_month = (30.6001 * (f64::from(m) + 1.0)).floor();

    jd_int + jd_month + day + f64::from(b) - 1524.5
}

/// Julian Date of a naive datetime taken as UTC.
pub fn jd_from_naive_utc(dt: &NaiveDateTime) -> f64 {
    let seconds =
        f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1_000_000_000.0;
    let day = f64::from(dt.day())
        + (f64::from(dt.hour()) + (f64::from(dt.minute()) + seconds / 60.0) / 60.0) / 24.0;
    calendar_to_jd(dt.year(), dt.month(), day)
}

/// Julian Date of a UTC instant.
pub fn jd_from_utc(utc: &DateTime<Utc>) -> f64 {
    jd_from_naive_utc(&utc.naive_utc())
}
