//! Year, month, day, and hour pillar arithmetic.
//!
//! The year boundary is Lichun (apparent solar longitude 315 deg), the month
//! boundary the 12 jie longitudes, the day a Julian Day Number cycle anchored
//! so that idx0 = (JDN - 11) mod 60, and the hour the 12 double-hours.
//!
//! Day and hour pillars are convention-sensitive: the caller supplies both
//! the civil wall-clock datetime and the true solar time, and the settings
//! pick which one each pillar reads.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::conventions::{ConventionSettings, DayBoundaryBasis, HourBasis, ZiConvention};
use crate::error::BaseError;
use crate::pillar::Pillar;

/// First-month (yin month) stem, indexed by year stem mod 5.
const FIRST_MONTH_STEM_BY_YEAR_STEM_MOD5: [u8; 5] = [2, 4, 6, 8, 0];

/// Zi-hour stem, indexed by day stem mod 5.
const ZI_HOUR_STEM_BY_DAY_STEM_MOD5: [u8; 5] = [0, 2, 4, 6, 8];

/// Day pillar with the intermediates the payload reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPillarResult {
    pub pillar: Pillar,
    /// Calendar date after applying the day-boundary and zi conventions.
    pub effective_date: NaiveDate,
    /// Julian Day Number of the effective date.
    pub jdn: i64,
    /// 0-based sexagenary day index, (JDN - 11) mod 60.
    pub idx0: u8,
}

/// Julian Day Number at civil noon of a Gregorian date (Fliegel-Van Flandern).
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = i64::from(14 - month) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// 0-based sexagenary index of a day, in [0, 60).
pub fn day_index_from_jdn(jdn: i64) -> u8 {
    ((jdn - 11).rem_euclid(60)) as u8
}

/// Year pillar and the effective bazi year.
///
/// A birth before Lichun of its civil year belongs to the previous
/// sexagenary year.
pub fn year_pillar(
    civil_year: i32,
    birth_jd_tt: f64,
    lichun_jd_tt: f64,
) -> Result<(Pillar, i32), BaseError> {
    let bazi_year = if birth_jd_tt < lichun_jd_tt {
        civil_year - 1
    } else {
        civil_year
    };
    let stem_idx = (i64::from(bazi_year) - 4).rem_euclid(10) as u8;
    let branch_idx = (i64::from(bazi_year) - 4).rem_euclid(12) as u8;
    Ok((Pillar::new(stem_idx, branch_idx)?, bazi_year))
}

/// Month branch from apparent solar longitude.
///
/// 315 deg opens the yin month (branch 2); each jie 30 deg later advances
/// one branch, wrapping 345 -> 15 into branch 3.
pub fn month_branch_index_from_longitude(lambda_apparent_deg: f64) -> u8 {
    let lam = lambda_apparent_deg.rem_euclid(360.0);
    if (315.0..345.0).contains(&lam) {
        2
    } else if lam >= 345.0 || lam < 15.0 {
        3
    } else if lam < 45.0 {
        4
    } else if lam < 75.0 {
        5
    } else if lam < 105.0 {
        6
    } else if lam < 135.0 {
        7
    } else if lam < 165.0 {
        8
    } else if lam < 195.0 {
        9
    } else if lam < 225.0 {
        10
    } else if lam < 255.0 {
        11
    } else if lam < 285.0 {
        0
    } else {
        1
    }
}

/// Month pillar from apparent solar longitude and the year stem.
pub fn month_pillar(lambda_apparent_deg: f64, year_stem_idx: u8) -> Result<Pillar, BaseError> {
    let branch_idx = month_branch_index_from_longitude(lambda_apparent_deg);
    let month_num = (i16::from(branch_idx) - 2).rem_euclid(12) as u8;
    let first_month_stem = FIRST_MONTH_STEM_BY_YEAR_STEM_MOD5[usize::from(year_stem_idx % 5)];
    let stem_idx = (first_month_stem + month_num) % 10;
    Pillar::new(stem_idx, branch_idx)
}

/// Calendar date that owns the day pillar under the given conventions.
pub fn effective_day_date(
    civil_dt_local: NaiveDateTime,
    tst_dt: NaiveDateTime,
    conventions: &ConventionSettings,
) -> NaiveDate {
    let basis_dt = match conventions.day_boundary_basis {
        DayBoundaryBasis::TrueSolar => tst_dt,
        DayBoundaryBasis::Civil => civil_dt_local,
    };

    let result = basis_dt.date();
    if conventions.zi_convention == ZiConvention::WholeZi23 && basis_dt.hour() == 23 {
        result + Duration::days(1)
    } else {
        result
    }
}

/// Day pillar under the given conventions.
pub fn day_pillar(
    civil_dt_local: NaiveDateTime,
    tst_dt: NaiveDateTime,
    conventions: &ConventionSettings,
) -> Result<DayPillarResult, BaseError> {
    let day_date = effective_day_date(civil_dt_local, tst_dt, conventions);
    let jdn = gregorian_to_jdn(day_date.year(), day_date.month(), day_date.day());
    let idx0 = day_index_from_jdn(jdn);
    let pillar = Pillar::new(idx0 % 10, idx0 % 12)?;
    Ok(DayPillarResult {
        pillar,
        effective_date: day_date,
        jdn,
        idx0,
    })
}

/// Branch of a double-hour. 23:00 and 00:00 both map to zi (branch 0).
pub fn hour_branch_index(hour: u32) -> u8 {
    if hour == 23 || hour == 0 {
        0
    } else {
        (((hour + 1) / 2) % 12) as u8
    }
}

/// Hour pillar from the day stem and the basis clock.
pub fn hour_pillar(
    day_stem_idx: u8,
    civil_dt_local: NaiveDateTime,
    tst_dt: NaiveDateTime,
    conventions: &ConventionSettings,
) -> Result<Pillar, BaseError> {
    let basis_dt = match conventions.hour_basis {
        HourBasis::TrueSolar => tst_dt,
        HourBasis::Civil => civil_dt_local,
    };

    let branch_idx = hour_branch_index(basis_dt.hour());
    let zi_hour_stem = ZI_HOUR_STEM_BY_DAY_STEM_MOD5[usize::from(day_stem_idx % 5)];
    let stem_idx = (zi_hour_stem + branch_idx) % 10;
    Pillar::new(stem_idx, branch_idx)
}
