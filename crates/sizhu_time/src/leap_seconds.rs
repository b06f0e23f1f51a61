//! Embedded TAI−UTC leap-second table.
//!
//! Effective offsets at each UTC threshold moment, 1972-01-01 (10 s) through
//! 2017-01-01 (37 s). All thresholds fall at 00:00:00 UTC, so lookup compares
//! calendar dates.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// One (threshold, TAI−UTC) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapSecondEntry {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub tai_minus_utc: i32,
}

const fn entry(year: i32, month: u32, day: u32, tai_minus_utc: i32) -> LeapSecondEntry {
    LeapSecondEntry {
        year,
        month,
        day,
        tai_minus_utc,
    }
}

/// Effective TAI−UTC at each UTC threshold moment, ascending.
pub const LEAP_SECOND_OFFSETS: [LeapSecondEntry; 28] = [
    entry(1972, 1, 1, 10),
    entry(1972, 7, 1, 11),
    entry(1973, 1, 1, 12),
    entry(1974, 1, 1, 13),
    entry(1975, 1, 1, 14),
    entry(1976, 1, 1, 15),
    entry(1977, 1, 1, 16),
    entry(1978, 1, 1, 17),
    entry(1979, 1, 1, 18),
    entry(1980, 1, 1, 19),
    entry(1981, 7, 1, 20),
    entry(1982, 7, 1, 21),
    entry(1983, 7, 1, 22),
    entry(1985, 7, 1, 23),
    entry(1988, 1, 1, 24),
    entry(1990, 1, 1, 25),
    entry(1991, 1, 1, 26),
    entry(1992, 7, 1, 27),
    entry(1993, 7, 1, 28),
    entry(1994, 7, 1, 29),
    entry(1996, 1, 1, 30),
    entry(1997, 7, 1, 31),
    entry(1999, 1, 1, 32),
    entry(2006, 1, 1, 33),
    entry(2009, 1, 1, 34),
    entry(2012, 7, 1, 35),
    entry(2015, 7, 1, 36),
    entry(2017, 1, 1, 37),
];

/// Provenance of the embedded table, reported in the engine payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeapSecondTableInfo {
    pub source: &'static str,
    pub last_update: &'static str,
    pub expires: &'static str,
}

pub const LEAP_SECOND_TABLE_INFO: LeapSecondTableInfo = LeapSecondTableInfo {
    source: "IANA leap-seconds.list",
    last_update: "2017-01-01T00:00:00Z",
    expires: "2025-06-28T00:00:00Z",
};

/// TAI−UTC in effect at a UTC instant; 0 before the first threshold.
pub fn leap_second_offset(utc: &DateTime<Utc>) -> i32 {
    let key = (utc.year(), utc.month(), utc.day());
    let idx = LEAP_SECOND_OFFSETS.partition_point(|e| (e.year, e.month, e.day) <= key);
    if idx == 0 {
        0
    } else {
        LEAP_SECOND_OFFSETS[idx - 1].tai_minus_utc
    }
}
