//! Four-Pillar (BaZi) computation engine.
//!
//! Takes a civil birth instant, runs the self-contained astronomical
//! pipeline (UTC resolution → TT → VSOP87D solar longitude → solar-term
//! boundaries → sexagenary arithmetic), and emits a deterministic payload.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sizhu_engine::{BirthInput, compute_engine_payload};
//!
//! let input = BirthInput::local(
//!     1988, 2, 4, 16, 30, 0,
//!     "Asia/Shanghai", 104.066, 30.658,
//! );
//! let payload = compute_engine_payload(&input)?;
//! println!("year pillar: {}{}",
//!     payload.pillars.year.pillar.stem.chinese,
//!     payload.pillars.year.pillar.branch.chinese);
//! ```
//!
//! The core is stateless and purely functional: every request is a
//! self-contained computation, and equal inputs produce byte-identical
//! canonical JSON.

pub mod engine;
pub mod error;
pub mod input;
pub mod integrity;
pub mod output;
pub mod payload;

pub use engine::{compute_engine_json, compute_engine_payload};
pub use error::EngineError;
pub use input::{BirthInput, NormalizedTimeInput, normalize_birth_input};
pub use integrity::{
    hour_boundary_distance_seconds, is_zi_hour_window, model_uncertainty_seconds_for_year,
};
pub use output::{dumps_deterministic, normalize_output_precision};
pub use payload::{
    AlternativePillars, BoundaryRecord, BoundedPillarRecord, EnginePayload, EngineSection,
    FlagsSection, InputSection, IntermediateSection, MetaSection, PillarRecord, PillarsSection,
    StemBranchRef, jie_term_label,
};

// Re-export the types callers need alongside the engine.
pub use sizhu_base::{
    BRANCHES, BaseError, ConventionSettings, DayBoundaryBasis, HourBasis, Pillar, STEMS,
    ZiConvention, all_convention_combinations,
};
pub use sizhu_search::SearchError;
pub use sizhu_sun::SolarPosition;
pub use sizhu_time::{ConversionMethod, TimeError, TtConversion, tzdb_version};
