//! Apparent solar longitude, equation of time, and true solar time.
//!
//! The geocentric pipeline: invert the Earth heliocentric longitude, negate
//! the latitude, then correct for nutation in longitude and annual
//! aberration. The equation of time follows Meeus chapter 28, using the
//! solar mean longitude referred to the mean equinox of date.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use sizhu_time::{J2000_JD, SECONDS_PER_DAY, jd_from_utc};

use crate::nutation::nutation_arcsec;
use crate::obliquity::true_obliquity_rad;
use crate::vsop87d::{earth_heliocentric_lbr, normalize_degrees};

/// Annual aberration constant, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Apparent geocentric solar state at one JD_TT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentLongitude {
    /// Apparent ecliptic longitude, degrees in [0, 360).
    pub lambda_deg: f64,
    /// Geocentric ecliptic latitude, degrees.
    pub beta_deg: f64,
    /// Earth-Sun distance, AU.
    pub radius_au: f64,
    /// Nutation in longitude, arcseconds.
    pub delta_psi_arcsec: f64,
    /// Nutation in obliquity, arcseconds.
    pub delta_epsilon_arcsec: f64,
    /// Julian centuries TT from J2000.0.
    pub t_centuries: f64,
}

/// Full solar position with the derived time quantities the engine reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub jd_tt: f64,
    pub lambda_apparent_deg: f64,
    pub beta_deg: f64,
    pub radius_au: f64,
    pub delta_psi_arcsec: f64,
    pub delta_epsilon_arcsec: f64,
    /// True obliquity, radians.
    pub epsilon_rad: f64,
    pub equation_of_time_minutes: f64,
    /// Local mean solar time at the birth meridian (naive).
    pub local_mean_solar_time: NaiveDateTime,
    /// True solar time at the birth meridian (naive).
    pub true_solar_time: NaiveDateTime,
}

/// Apparent geocentric solar longitude and intermediates at a JD_TT.
pub fn apparent_longitude(jd_tt: f64) -> ApparentLongitude {
    let tau = (jd_tt - J2000_JD) / 365_250.0;
    let t_centuries = (jd_tt - J2000_JD) / 36_525.0;

    let (earth_l_deg, earth_b_deg, radius_au) = earth_heliocentric_lbr(tau);
    let theta_deg = normalize_degrees(earth_l_deg + 180.0);
    let beta_deg = -earth_b_deg;

    let (delta_psi_arcsec, delta_epsilon_arcsec) = nutation_arcsec(t_centuries);
    let aberration_deg = (-ABERRATION_ARCSEC / radius_au) / 3600.0;
    let lambda_deg =
        normalize_degrees(theta_deg + delta_psi_arcsec / 3600.0 + aberration_deg);

    ApparentLongitude {
        lambda_deg,
        beta_deg,
        radius_au,
        delta_psi_arcsec,
        delta_epsilon_arcsec,
        t_centuries,
    }
}

/// Apparent longitude alone, for root-finding callbacks.
pub fn apparent_longitude_deg(jd_tt: f64) -> f64 {
    apparent_longitude(jd_tt).lambda_deg
}

/// Equation of time in minutes (apparent minus mean solar time).
fn equation_of_time_minutes(state: &ApparentLongitude, epsilon_rad: f64) -> f64 {
    let lambda_rad = state.lambda_deg.to_radians();
    let beta_rad = state.beta_deg.to_radians();

    // Apparent right ascension, shifted into [0, 2*pi).
    let mut alpha = (lambda_rad.sin() * epsilon_rad.cos()
        - beta_rad.tan() * epsilon_rad.sin())
    .atan2(lambda_rad.cos());
    if alpha < 0.0 {
        alpha += 2.0 * std::f64::consts::PI;
    }
    let alpha_deg = alpha.to_degrees();

    let t = state.t_centuries;
    let l0_deg = normalize_degrees(280.46646 + 36000.76983 * t + 0.0003032 * t * t);

    let mut eot_deg = l0_deg - alpha_deg + (state.delta_psi_arcsec / 3600.0) * epsilon_rad.cos()
        - ABERRATION_ARCSEC / (3600.0 * state.radius_au);
    if eot_deg > 180.0 {
        eot_deg -= 360.0;
    }
    if eot_deg <= -180.0 {
        eot_deg += 360.0;
    }
    eot_deg * 4.0
}

fn seconds_duration(seconds: f64) -> Duration {
    Duration::microseconds((seconds * 1e6).round() as i64)
}

/// Solar position and true solar time for a UTC instant at a meridian.
pub fn solar_position_and_tst(
    utc: &DateTime<Utc>,
    longitude_deg: f64,
    tt_minus_utc_seconds: f64,
) -> SolarPosition {
    let jd_utc = jd_from_utc(utc);
    let jd_tt = jd_utc + tt_minus_utc_seconds / SECONDS_PER_DAY;

    let state = apparent_longitude(jd_tt);
    let epsilon_rad = true_obliquity_rad(state.t_centuries, state.delta_epsilon_arcsec);
    let eot_minutes = equation_of_time_minutes(&state, epsilon_rad);

    let lmst = utc.naive_utc() + seconds_duration(longitude_deg / 15.0 * 3600.0);
    let tst = lmst + seconds_duration(eot_minutes * 60.0);

    SolarPosition {
        jd_tt,
        lambda_apparent_deg: state.lambda_deg,
        beta_deg: state.beta_deg,
        radius_au: state.radius_au,
        delta_psi_arcsec: state.delta_psi_arcsec,
        delta_epsilon_arcsec: state.delta_epsilon_arcsec,
        epsilon_rad,
        equation_of_time_minutes: eot_minutes,
        local_mean_solar_time: lmst,
        true_solar_time: tst,
    }
}
