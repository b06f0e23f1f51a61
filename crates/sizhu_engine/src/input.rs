//! Birth input and its normalization to a UTC instant.
//!
//! Two modes share one record: local mode carries a civil wall-clock plus an
//! IANA zone, UTC mode carries an ISO timestamp. Validation happens here,
//! before any astronomy runs.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use sizhu_base::{ConventionSettings, EnginePolicy};
use sizhu_time::{resolve_local_to_utc, tzdb_version};

use crate::error::EngineError;

/// Maximum |latitude| before the high-latitude warning applies.
const HIGH_LATITUDE_DEG: f64 = 66.0;

/// A birth instant as supplied by the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BirthInput {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    /// IANA zone name, e.g. "Asia/Shanghai".
    pub timezone_name: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    /// DST fall-back disambiguator: 0 = first occurrence, 1 = second.
    pub fold: Option<u8>,
    /// UTC mode: ISO-8601 timestamp with offset, replaces the local fields.
    pub utc_timestamp: Option<String>,
    pub birth_time_uncertainty_seconds: Option<f64>,
    pub conventions: ConventionSettings,
}

impl BirthInput {
    /// Local-mode input with default conventions.
    #[allow(clippy::too_many_arguments)]
    pub fn local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        timezone_name: &str,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            timezone_name: Some(timezone_name.to_string()),
            longitude,
            latitude,
            ..Self::default()
        }
    }

    /// UTC-mode input with default conventions.
    pub fn utc(timestamp: &str, longitude: f64, latitude: f64) -> Self {
        Self {
            utc_timestamp: Some(timestamp.to_string()),
            longitude,
            latitude,
            ..Self::default()
        }
    }
}

/// A birth input resolved to a UTC instant.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTimeInput {
    pub utc_datetime: DateTime<Utc>,
    /// The naive local wall-clock, absent in UTC mode.
    pub civil_datetime_local: Option<NaiveDateTime>,
    pub timezone_name: Option<String>,
    pub fold: Option<u8>,
    pub longitude: f64,
    pub latitude: f64,
    pub high_latitude_warning: bool,
    pub tzdb_version: &'static str,
}

/// Validate a birth input and resolve it to UTC.
pub fn normalize_birth_input(value: &BirthInput) -> Result<NormalizedTimeInput, EngineError> {
    let policy = EnginePolicy::default();

    if !(-90.0..=90.0).contains(&value.latitude) {
        return Err(EngineError::InvalidLatitude(value.latitude));
    }
    if !(-180.0..=180.0).contains(&value.longitude) {
        return Err(EngineError::InvalidLongitude(value.longitude));
    }

    let high_latitude_warning = value.latitude.abs() > HIGH_LATITUDE_DEG;

    if let Some(timestamp) = value.utc_timestamp.as_deref().filter(|s| !s.is_empty()) {
        let parsed = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| EngineError::InvalidUtcTimestamp(e.to_string()))?;
        let utc_datetime = parsed.with_timezone(&Utc);
        policy.validate_year(utc_datetime.year())?;
        return Ok(NormalizedTimeInput {
            utc_datetime,
            civil_datetime_local: None,
            timezone_name: None,
            fold: None,
            longitude: value.longitude,
            latitude: value.latitude,
            high_latitude_warning,
            tzdb_version: tzdb_version(),
        });
    }

    let (
        Some(year),
        Some(month),
        Some(day),
        Some(hour),
        Some(minute),
        Some(second),
        Some(timezone_name),
    ) = (
        value.year,
        value.month,
        value.day,
        value.hour,
        value.minute,
        value.second,
        value.timezone_name.as_deref(),
    )
    else {
        return Err(EngineError::MissingLocalFields);
    };

    policy.validate_year(year)?;

    let wall = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            EngineError::InvalidCivilDate(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))
        })?;

    let utc_datetime = resolve_local_to_utc(wall, timezone_name, value.fold)?;

    Ok(NormalizedTimeInput {
        utc_datetime,
        civil_datetime_local: Some(wall),
        timezone_name: Some(timezone_name.to_string()),
        fold: value.fold,
        longitude: value.longitude,
        latitude: value.latitude,
        high_latitude_warning,
        tzdb_version: tzdb_version(),
    })
}
