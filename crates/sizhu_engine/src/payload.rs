//! Typed payload records mirroring the serialized shape.
//!
//! Each component of the pipeline returns a record; this module assembles
//! them into the sectioned payload. Serialization itself is a single
//! boundary step in [`crate::output`].

use serde::Serialize;

use sizhu_base::{BRANCHES, ConventionSettings, Pillar, STEMS};
use sizhu_time::{ConversionMethod, LeapSecondTableInfo};

/// Labels of the 12 jie by target longitude.
const JIE_TERM_LABELS: [(f64, &str); 12] = [
    (315.0, "lichun_315"),
    (345.0, "jingzhe_345"),
    (15.0, "qingming_15"),
    (45.0, "lixia_45"),
    (75.0, "mangzhong_75"),
    (105.0, "xiaoshu_105"),
    (135.0, "liqiu_135"),
    (165.0, "bailu_165"),
    (195.0, "hanlu_195"),
    (225.0, "lidong_225"),
    (255.0, "daxue_255"),
    (285.0, "xiaohan_285"),
];

/// Label of a jie target longitude, e.g. 315.0 -> "lichun_315".
pub fn jie_term_label(target_longitude_deg: f64) -> Option<&'static str> {
    JIE_TERM_LABELS
        .iter()
        .find(|(target, _)| *target == target_longitude_deg)
        .map(|&(_, label)| label)
}

/// Year-boundary label.
pub const LICHUN_LABEL: &str = "lichun_315";

/// Month-boundary label.
pub const NEAREST_JIE_LABEL: &str = "nearest_jie_boundary";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StemBranchRef {
    pub index: u8,
    pub chinese: &'static str,
}

/// Serialized form of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarRecord {
    pub stem: StemBranchRef,
    pub branch: StemBranchRef,
}

impl From<Pillar> for PillarRecord {
    fn from(pillar: Pillar) -> Self {
        Self {
            stem: StemBranchRef {
                index: pillar.stem_idx(),
                chinese: STEMS[usize::from(pillar.stem_idx())],
            },
            branch: StemBranchRef {
                index: pillar.branch_idx(),
                chinese: BRANCHES[usize::from(pillar.branch_idx())],
            },
        }
    }
}

/// Distance of the birth to the boundary that decided a pillar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub distance_seconds: f64,
    pub note: String,
}

/// Signed-distance note for a boundary record.
pub fn boundary_note(distance_seconds: f64, label: &str) -> String {
    if distance_seconds < 0.0 {
        format!("Birth is before boundary {label}.")
    } else {
        format!("Birth is after boundary {label}.")
    }
}

/// A pillar with its boundary record (year and month pillars).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundedPillarRecord {
    #[serde(flatten)]
    pub pillar: PillarRecord,
    pub boundary: BoundaryRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarsSection {
    pub year: BoundedPillarRecord,
    pub month: BoundedPillarRecord,
    pub day: PillarRecord,
    pub hour: PillarRecord,
}

/// Day and hour pillars under the opposite zi convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativePillars {
    pub day: PillarRecord,
    pub hour: PillarRecord,
    pub conventions: ConventionSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSection {
    pub version: &'static str,
    pub vsop87_series: &'static str,
    pub nutation_model: &'static str,
    pub mean_obliquity_model: &'static str,
    pub delta_t_model: &'static str,
    pub tzdb_version: &'static str,
    pub leap_second_table: LeapSecondTableInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSection {
    pub date: String,
    pub time: String,
    pub timezone: Option<String>,
    pub fold: Option<u8>,
    pub longitude: f64,
    pub latitude: f64,
    pub birth_time_uncertainty_seconds: Option<f64>,
    pub conventions: ConventionSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntermediateSection {
    pub utc_time: String,
    pub delta_t_seconds: f64,
    pub tt_conversion_method: ConversionMethod,
    pub tt_julian_date: f64,
    pub solar_longitude_deg: f64,
    pub equation_of_time_minutes: f64,
    pub local_mean_solar_time: String,
    pub true_solar_time: String,
    pub effective_day_date: String,
    pub julian_day_number: i64,
    pub sexagenary_day_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagsSection {
    pub zi_hour_window: bool,
    pub solar_term_ambiguous: bool,
    pub hour_boundary_proximity_seconds: f64,
    pub model_uncertainty_seconds: f64,
    pub high_latitude_warning: bool,
    pub alternative_pillars: Option<AlternativePillars>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetaSection {
    pub bazi_year: i32,
}

/// The complete engine payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnginePayload {
    pub engine: EngineSection,
    pub input: InputSection,
    pub intermediate: IntermediateSection,
    pub pillars: PillarsSection,
    pub flags: FlagsSection,
    pub meta: MetaSection,
}
