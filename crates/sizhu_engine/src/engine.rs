//! Pipeline orchestration.
//!
//! Composes normalization, the TT conversion, the solar kernel, solar-term
//! search, pillar arithmetic, and integrity evaluation into the sectioned
//! payload.

use chrono::Datelike;

use sizhu_base::{DayBoundaryBasis, HourBasis, day_pillar, hour_pillar, month_pillar, year_pillar};
use sizhu_search::{lichun_jd_tt, month_boundary_jds, nearest_jie_distance_seconds};
use sizhu_sun::{
    MEAN_OBLIQUITY_MODEL, NUTATION_MODEL, VSOP87_SERIES, solar_position_and_tst,
};
use sizhu_time::{DELTA_T_MODEL, SECONDS_PER_DAY, convert_utc_to_tt};

use crate::error::EngineError;
use crate::input::{BirthInput, normalize_birth_input};
use crate::integrity::{
    hour_boundary_distance_seconds, is_zi_hour_window, model_uncertainty_seconds_for_year,
};
use crate::output::dumps_deterministic;
use crate::payload::{
    AlternativePillars, BoundaryRecord, BoundedPillarRecord, EnginePayload, EngineSection,
    FlagsSection, InputSection, IntermediateSection, LICHUN_LABEL, MetaSection, NEAREST_JIE_LABEL,
    PillarRecord, PillarsSection, boundary_note,
};

/// Compute the full payload for a birth input.
pub fn compute_engine_payload(input: &BirthInput) -> Result<EnginePayload, EngineError> {
    let normalized = normalize_birth_input(input)?;
    let tt = convert_utc_to_tt(&normalized.utc_datetime)?;

    let solar = solar_position_and_tst(
        &normalized.utc_datetime,
        normalized.longitude,
        tt.tt_minus_utc_seconds,
    );

    let civil_year = normalized.utc_datetime.year();
    let lichun_jd = lichun_jd_tt(civil_year)?;
    let (year_result, bazi_year) = year_pillar(civil_year, solar.jd_tt, lichun_jd)?;
    let month_result = month_pillar(solar.lambda_apparent_deg, year_result.stem_idx())?;

    let civil_local = normalized
        .civil_datetime_local
        .unwrap_or_else(|| normalized.utc_datetime.naive_utc());

    let day_result = day_pillar(civil_local, solar.true_solar_time, &input.conventions)?;
    let hour_result = hour_pillar(
        day_result.pillar.stem_idx(),
        civil_local,
        solar.true_solar_time,
        &input.conventions,
    )?;

    let term_jds = month_boundary_jds(civil_year)?;
    let nearest_term_seconds = nearest_jie_distance_seconds(solar.jd_tt, &term_jds);
    let model_uncertainty_seconds = model_uncertainty_seconds_for_year(civil_year);
    let user_uncertainty = input.birth_time_uncertainty_seconds.unwrap_or(0.0);
    let total_uncertainty_seconds = model_uncertainty_seconds.max(user_uncertainty);
    let solar_term_ambiguous = nearest_term_seconds < total_uncertainty_seconds;

    let hour_basis_dt = match input.conventions.hour_basis {
        HourBasis::TrueSolar => solar.true_solar_time,
        HourBasis::Civil => civil_local,
    };
    let hour_boundary_seconds = hour_boundary_distance_seconds(&hour_basis_dt);

    let zi_basis_dt = match input.conventions.day_boundary_basis {
        DayBoundaryBasis::TrueSolar => solar.true_solar_time,
        DayBoundaryBasis::Civil => civil_local,
    };
    let zi_window = is_zi_hour_window(&zi_basis_dt);

    let alternative_pillars = if zi_window {
        let alternative_conventions = input.conventions.with_opposite_zi();
        let alt_day = day_pillar(civil_local, solar.true_solar_time, &alternative_conventions)?;
        let alt_hour = hour_pillar(
            alt_day.pillar.stem_idx(),
            civil_local,
            solar.true_solar_time,
            &alternative_conventions,
        )?;
        Some(AlternativePillars {
            day: PillarRecord::from(alt_day.pillar),
            hour: PillarRecord::from(alt_hour),
            conventions: alternative_conventions,
        })
    } else {
        None
    };

    let lichun_distance_seconds = (solar.jd_tt - lichun_jd) * SECONDS_PER_DAY;

    Ok(EnginePayload {
        engine: EngineSection {
            version: env!("CARGO_PKG_VERSION"),
            vsop87_series: VSOP87_SERIES,
            nutation_model: NUTATION_MODEL,
            mean_obliquity_model: MEAN_OBLIQUITY_MODEL,
            delta_t_model: DELTA_T_MODEL,
            tzdb_version: normalized.tzdb_version,
            leap_second_table: tt.leap_second_table,
        },
        input: InputSection {
            date: civil_local.format("%Y-%m-%d").to_string(),
            time: civil_local.format("%H:%M:%S").to_string(),
            timezone: normalized.timezone_name.clone(),
            fold: normalized.fold,
            longitude: normalized.longitude,
            latitude: normalized.latitude,
            birth_time_uncertainty_seconds: input.birth_time_uncertainty_seconds,
            conventions: input.conventions,
        },
        intermediate: IntermediateSection {
            utc_time: normalized
                .utc_datetime
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
            delta_t_seconds: tt.delta_t_seconds,
            tt_conversion_method: tt.method,
            tt_julian_date: solar.jd_tt,
            solar_longitude_deg: solar.lambda_apparent_deg,
            equation_of_time_minutes: solar.equation_of_time_minutes,
            local_mean_solar_time: solar
                .local_mean_solar_time
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            true_solar_time: solar.true_solar_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            effective_day_date: day_result.effective_date.format("%Y-%m-%d").to_string(),
            julian_day_number: day_result.jdn,
            sexagenary_day_index: day_result.idx0,
        },
        pillars: PillarsSection {
            year: BoundedPillarRecord {
                pillar: PillarRecord::from(year_result),
                boundary: BoundaryRecord {
                    kind: LICHUN_LABEL,
                    distance_seconds: lichun_distance_seconds,
                    note: boundary_note(lichun_distance_seconds, LICHUN_LABEL),
                },
            },
            month: BoundedPillarRecord {
                pillar: PillarRecord::from(month_result),
                boundary: BoundaryRecord {
                    kind: NEAREST_JIE_LABEL,
                    distance_seconds: nearest_term_seconds,
                    note: "Distance to nearest month boundary term.".to_string(),
                },
            },
            day: PillarRecord::from(day_result.pillar),
            hour: PillarRecord::from(hour_result),
        },
        flags: FlagsSection {
            zi_hour_window: zi_window,
            solar_term_ambiguous,
            hour_boundary_proximity_seconds: hour_boundary_seconds,
            model_uncertainty_seconds,
            high_latitude_warning: normalized.high_latitude_warning,
            alternative_pillars,
        },
        meta: MetaSection { bazi_year },
    })
}

/// Compute the payload and serialize it to canonical JSON bytes.
pub fn compute_engine_json(input: &BirthInput) -> Result<String, EngineError> {
    let payload = compute_engine_payload(input)?;
    dumps_deterministic(&payload)
}
