//! Base types for the Four-Pillar (BaZi) engine.
//!
//! This crate provides:
//! - The three convention switches (zi hour, hour basis, day boundary basis)
//! - Engine scope policy (supported year range, Gregorian-only input)
//! - Heavenly stem / earthly branch tables and the `Pillar` type
//! - Year, month, day, and hour pillar arithmetic
//!
//! All implementations are clean-room, derived from the standard sexagenary
//! cycle conventions and public astronomical formulas.

pub mod conventions;
pub mod error;
pub mod pillar;
pub mod policy;
pub mod sexagenary;

pub use conventions::{
    ConventionSettings, DayBoundaryBasis, HourBasis, ZiConvention, all_convention_combinations,
};
pub use error::BaseError;
pub use pillar::{BRANCHES, Pillar, STEMS};
pub use policy::{
    EnginePolicy, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, TimeConversionRoute,
    route_time_conversion,
};
pub use sexagenary::{
    DayPillarResult, day_index_from_jdn, day_pillar, effective_day_date, gregorian_to_jdn,
    hour_branch_index, hour_pillar, month_branch_index_from_longitude, month_pillar, year_pillar,
};
