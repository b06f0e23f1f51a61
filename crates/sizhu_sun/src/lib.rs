//! Solar position kernel for the Four-Pillar engine.
//!
//! This crate provides:
//! - The VSOP87D Earth heliocentric series evaluator and its data pack
//! - Nutation in longitude and obliquity (compact IAU-style model)
//! - IAU 2006 mean obliquity
//! - Apparent geocentric solar longitude, equation of time, and true solar
//!   time at a meridian
//!
//! All series are compiled in; the engine performs no file I/O.

pub mod nutation;
pub mod obliquity;
pub mod position;
pub mod vsop87d;
pub mod vsop87d_earth;

pub use nutation::{NUTATION_MODEL, nutation_arcsec};
pub use obliquity::{
    MEAN_OBLIQUITY_MODEL, arcsec_to_rad, mean_obliquity_arcsec_iau2006, true_obliquity_rad,
};
pub use position::{
    ApparentLongitude, SolarPosition, apparent_longitude, apparent_longitude_deg,
    solar_position_and_tst,
};
pub use vsop87d::{VSOP87_SERIES, earth_heliocentric_lbr, normalize_degrees};
