//! Golden end-to-end scenarios with externally checked pillar sets.

use sizhu_engine::{
    BirthInput, ConventionSettings, DayBoundaryBasis, HourBasis, PillarRecord, ZiConvention,
    compute_engine_payload,
};

fn all_civil() -> ConventionSettings {
    ConventionSettings {
        zi_convention: ZiConvention::SplitMidnight,
        hour_basis: HourBasis::Civil,
        day_boundary_basis: DayBoundaryBasis::Civil,
    }
}

fn pillar_name(record: &PillarRecord) -> String {
    format!("{}{}", record.stem.chinese, record.branch.chinese)
}

/// 1988-02-04 16:30 in Chengdu: a birth a few hours before Lichun, so the
/// year pillar still belongs to 1987 (fire rabbit).
#[test]
fn canonical_1988_case() {
    let input = BirthInput::local(1988, 2, 4, 16, 30, 0, "Asia/Shanghai", 104.066, 30.658);
    let payload = compute_engine_payload(&input).unwrap();

    assert_eq!(pillar_name(&payload.pillars.year.pillar), "丁卯");
    assert_eq!(pillar_name(&payload.pillars.month.pillar), "癸丑");
    assert_eq!(pillar_name(&payload.pillars.day), "己丑");
    assert_eq!(pillar_name(&payload.pillars.hour), "壬申");

    assert_eq!(payload.meta.bazi_year, 1987);
    // Birth precedes the Lichun boundary.
    assert!(payload.pillars.year.boundary.distance_seconds < 0.0);
    assert!(payload.pillars.year.boundary.note.contains("before"));
    assert_eq!(payload.pillars.year.boundary.kind, "lichun_315");
    // Pre-Lichun longitude sits in the [285, 315) chou month slice.
    assert!(payload.intermediate.solar_longitude_deg < 315.0);
    assert!(payload.intermediate.solar_longitude_deg >= 285.0);
}

/// Same instant through UTC mode resolves to the same pillars.
#[test]
fn canonical_1988_case_utc_mode() {
    let input = BirthInput::utc("1988-02-04T08:30:00Z", 104.066, 30.658);
    let payload = compute_engine_payload(&input).unwrap();

    assert_eq!(pillar_name(&payload.pillars.year.pillar), "丁卯");
    assert_eq!(pillar_name(&payload.pillars.month.pillar), "癸丑");
    assert_eq!(pillar_name(&payload.pillars.day), "己丑");
    assert_eq!(pillar_name(&payload.pillars.hour), "壬申");
    assert_eq!(payload.input.timezone, None);
}

/// Late-evening birth: the zi convention decides which day owns it.
#[test]
fn whole_zi_toggle_changes_day_pillar() {
    let mut input = BirthInput::local(2024, 6, 1, 23, 30, 0, "Asia/Shanghai", 116.4074, 39.9042);
    input.conventions = all_civil();
    let split = compute_engine_payload(&input).unwrap();

    input.conventions.zi_convention = ZiConvention::WholeZi23;
    let whole = compute_engine_payload(&input).unwrap();

    assert_ne!(split.pillars.day, whole.pillars.day);
    assert_eq!(
        whole.intermediate.julian_day_number,
        split.intermediate.julian_day_number + 1
    );
    // Both runs flag the zi window and attach the opposite-convention
    // alternative, which mirrors the other run's day pillar.
    assert!(split.flags.zi_hour_window);
    assert!(whole.flags.zi_hour_window);
    let split_alt = split.flags.alternative_pillars.unwrap();
    assert_eq!(split_alt.day, whole.pillars.day);
    assert_eq!(split_alt.conventions.zi_convention, ZiConvention::WholeZi23);
}

/// In Urumqi the civil clock runs far ahead of the sun; the hour basis
/// moves the hour pillar by a full double-hour.
#[test]
fn hour_basis_divergence() {
    let mut input = BirthInput::local(2024, 6, 1, 14, 0, 0, "Asia/Shanghai", 87.6, 43.8);
    input.conventions = all_civil();
    let civil = compute_engine_payload(&input).unwrap();

    input.conventions.hour_basis = HourBasis::TrueSolar;
    let solar = compute_engine_payload(&input).unwrap();

    assert_eq!(civil.pillars.hour.branch.chinese, "未");
    assert_eq!(solar.pillars.hour.branch.chinese, "午");
    assert_ne!(civil.pillars.hour.branch, solar.pillars.hour.branch);
}

/// Model identifiers and table metadata ride along in the engine section.
#[test]
fn engine_section_reports_models() {
    let input = BirthInput::local(2024, 6, 1, 12, 0, 0, "Asia/Shanghai", 116.4074, 39.9042);
    let payload = compute_engine_payload(&input).unwrap();

    assert_eq!(payload.engine.vsop87_series, "VSOP87D_full_Earth");
    assert_eq!(payload.engine.nutation_model, "IAU_2000A");
    assert_eq!(payload.engine.mean_obliquity_model, "IAU_2006");
    assert_eq!(payload.engine.delta_t_model, "Espenak_Meeus");
    assert!(!payload.engine.tzdb_version.is_empty());
    assert_eq!(payload.engine.leap_second_table.source, "IANA leap-seconds.list");
}

/// Leap-second era: TT − UTC is 69.184 s and the method is leap_seconds.
#[test]
fn modern_tt_conversion_in_payload() {
    let input = BirthInput::utc("2017-01-01T00:00:00Z", 0.0, 0.0);
    let payload = compute_engine_payload(&input).unwrap();
    assert!((payload.intermediate.delta_t_seconds - 69.184).abs() < 1e-9);
    assert_eq!(
        payload.intermediate.tt_conversion_method.as_str(),
        "leap_seconds"
    );
}

/// Pre-1972 birth routes through the Delta-T polynomial.
#[test]
fn pre_1972_tt_conversion_in_payload() {
    let input = BirthInput::local(1950, 1, 1, 12, 0, 0, "Asia/Shanghai", 121.47, 31.23);
    let payload = compute_engine_payload(&input).unwrap();
    assert_eq!(payload.intermediate.tt_conversion_method.as_str(), "delta_t");
    assert!((payload.intermediate.delta_t_seconds - 29.07).abs() < 0.1);
    assert_eq!(payload.flags.model_uncertainty_seconds, 1.5);
}

/// Quiet afternoon birth: no zi window, no alternative pillars.
#[test]
fn afternoon_has_no_alternatives() {
    let input = BirthInput::local(2024, 6, 1, 15, 4, 30, "Asia/Shanghai", 116.4074, 39.9042);
    let payload = compute_engine_payload(&input).unwrap();
    assert!(!payload.flags.zi_hour_window);
    assert!(payload.flags.alternative_pillars.is_none());
}

/// Day index stays in [0, 60) and matches the stem/branch decomposition.
#[test]
fn day_index_consistency() {
    let input = BirthInput::local(2024, 2, 10, 12, 0, 0, "Asia/Shanghai", 116.4074, 39.9042);
    let payload = compute_engine_payload(&input).unwrap();
    let idx0 = payload.intermediate.sexagenary_day_index;
    assert!(idx0 < 60);
    assert_eq!(payload.pillars.day.stem.index, idx0 % 10);
    assert_eq!(payload.pillars.day.branch.index, idx0 % 12);
}
