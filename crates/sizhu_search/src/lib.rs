//! Solar-term boundary search.
//!
//! Finds the JD_TT instants where the apparent solar longitude reaches a
//! target angle: the 12 jie month boundaries and Lichun (315 deg), the
//! sexagenary year boundary. Uses longitude-aware bracketing plus a Brent
//! solver on the bracketed interval.

pub mod error;
pub mod root_finding;
pub mod solar_term;

pub use error::SearchError;
pub use root_finding::{brentq, find_bracket, normalize_longitude_difference};
pub use solar_term::{
    DEFAULT_TOLERANCE_SECONDS, JIE_TARGET_LONGITUDES, TERM_SEEDS, find_solar_term,
    find_solar_term_with_tolerance, lichun_jd_tt, month_boundary_jds,
    nearest_jie_distance_seconds, seed_jd_for_target,
};
