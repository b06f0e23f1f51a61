//! Time conversion for the Four-Pillar engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - Wall-clock → UTC resolution with explicit DST gap/fold handling
//! - The embedded leap-second table (TAI−UTC, 1972-2017)
//! - Espenak-Meeus Delta-T polynomial segments (1941-2150)
//! - The routed UTC → TT conversion

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod leap_seconds;
pub mod scales;

pub use civil::{resolve_local_to_utc, tzdb_version};
pub use delta_t::{DELTA_T_MODEL, DeltaTSegment, delta_t_seconds};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_from_naive_utc, jd_from_utc};
pub use leap_seconds::{LEAP_SECOND_TABLE_INFO, LeapSecondTableInfo, leap_second_offset};
pub use scales::{ConversionMethod, TtConversion, convert_utc_to_tt, decimal_year};
