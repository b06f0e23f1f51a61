//! Boundary-proximity and uncertainty evaluation.

use chrono::{NaiveDateTime, Timelike};

/// Model uncertainty of the computed instant, seconds.
///
/// Pre-1972 births ride on the Delta-T polynomial fit; after that leap
/// seconds make the conversion exact and only the solar theory remains.
pub fn model_uncertainty_seconds_for_year(year: i32) -> f64 {
    if year < 1972 { 1.5 } else { 0.5 }
}

/// Distance from the basis clock to the nearest whole hour, seconds
/// (0..=1800).
pub fn hour_boundary_distance_seconds(basis_dt: &NaiveDateTime) -> f64 {
    let seconds_of_hour = f64::from(basis_dt.minute()) * 60.0
        + f64::from(basis_dt.second())
        + f64::from(basis_dt.nanosecond()) / 1_000_000_000.0;
    seconds_of_hour.min(3600.0 - seconds_of_hour)
}

/// Whether the basis clock falls in the zi double-hour window.
pub fn is_zi_hour_window(basis_dt: &NaiveDateTime) -> bool {
    basis_dt.hour() == 23 || basis_dt.hour() == 0
}
