//! Solar-term instants: the 12 jie and Lichun.
//!
//! Each target longitude gets a fixed calendar seed near where the Sun
//! reaches it; the bracket scan tolerates the +-2 day drift of the terms
//! across years.

use sizhu_sun::apparent_longitude_deg;
use sizhu_time::{SECONDS_PER_DAY, calendar_to_jd};

use crate::error::SearchError;
use crate::root_finding::{brentq, find_bracket, normalize_longitude_difference};

/// Refinement tolerance, seconds of time.
pub const DEFAULT_TOLERANCE_SECONDS: f64 = 0.01;

/// The 12 jie longitudes marking month boundaries, in month order from
/// Lichun.
pub const JIE_TARGET_LONGITUDES: [f64; 12] = [
    315.0, 345.0, 15.0, 45.0, 75.0, 105.0, 135.0, 165.0, 195.0, 225.0, 255.0, 285.0,
];

/// Calendar seed (month, day) for each jie target, in calendar order.
pub const TERM_SEEDS: [(f64, u32, u32); 12] = [
    (285.0, 1, 5),
    (315.0, 2, 4),
    (345.0, 3, 6),
    (15.0, 4, 5),
    (45.0, 5, 6),
    (75.0, 6, 6),
    (105.0, 7, 7),
    (135.0, 8, 7),
    (165.0, 9, 7),
    (195.0, 10, 8),
    (225.0, 11, 7),
    (255.0, 12, 7),
];

/// Seed JD (midnight UTC of the table date) for a jie target in a year.
///
/// Returns `None` for a longitude that is not one of the 12 jie.
pub fn seed_jd_for_target(year: i32, target_longitude_deg: f64) -> Option<f64> {
    TERM_SEEDS
        .iter()
        .find(|(target, _, _)| *target == target_longitude_deg)
        .map(|&(_, month, day)| calendar_to_jd(year, month, f64::from(day)))
}

/// JD_TT where the apparent solar longitude reaches `target_longitude_deg`,
/// starting from `seed_jd_tt`, refined to `tolerance_seconds`.
pub fn find_solar_term_with_tolerance(
    target_longitude_deg: f64,
    seed_jd_tt: f64,
    tolerance_seconds: f64,
) -> Result<f64, SearchError> {
    let (jd_a, jd_b) = find_bracket(target_longitude_deg, seed_jd_tt, apparent_longitude_deg)?;
    let f = |jd: f64| {
        normalize_longitude_difference(apparent_longitude_deg(jd) - target_longitude_deg)
    };
    let xtol_days = tolerance_seconds / SECONDS_PER_DAY;
    brentq(f, jd_a, jd_b, xtol_days, 100).map_err(|e| match e {
        SearchError::IterationLimit { .. } => SearchError::BrentDidNotConverge {
            target_longitude_deg,
            seed_jd_tt,
        },
        other => other,
    })
}

/// [`find_solar_term_with_tolerance`] at the default 0.01 s tolerance.
pub fn find_solar_term(target_longitude_deg: f64, seed_jd_tt: f64) -> Result<f64, SearchError> {
    find_solar_term_with_tolerance(target_longitude_deg, seed_jd_tt, DEFAULT_TOLERANCE_SECONDS)
}

/// JD_TT of Lichun (315 deg) for a civil year, seeded at Feb 4.
pub fn lichun_jd_tt(civil_year: i32) -> Result<f64, SearchError> {
    let seed_jd = calendar_to_jd(civil_year, 2, 4.0);
    find_solar_term(315.0, seed_jd)
}

/// All 12 jie instants for (year−1, year, year+1): the candidate month
/// boundaries nearest any birth in `civil_year`.
pub fn month_boundary_jds(civil_year: i32) -> Result<Vec<f64>, SearchError> {
    let mut instants = Vec::with_capacity(36);
    for year in [civil_year - 1, civil_year, civil_year + 1] {
        for &(target, month, day) in &TERM_SEEDS {
            let seed_jd = calendar_to_jd(year, month, f64::from(day));
            instants.push(find_solar_term(target, seed_jd)?);
        }
    }
    Ok(instants)
}

/// Seconds from a birth instant to the nearest candidate boundary.
///
/// Returns infinity for an empty candidate list.
pub fn nearest_jie_distance_seconds(birth_jd_tt: f64, term_jds: &[f64]) -> f64 {
    term_jds
        .iter()
        .fold(f64::INFINITY, |best, jd| {
            best.min((birth_jd_tt - jd).abs())
        })
        * SECONDS_PER_DAY
}
