//! Routed UTC → TT conversion.
//!
//! From 1972 the offset is exact: TT − UTC = (TAI − UTC) + 32.184 s. Before
//! 1972 the engine approximates TT − UTC with the Delta-T polynomial fit.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use sizhu_base::{TimeConversionRoute, route_time_conversion};

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::jd_from_utc;
use crate::leap_seconds::{LEAP_SECOND_TABLE_INFO, LeapSecondTableInfo, leap_second_offset};

/// Offset between TT and TAI, in seconds.
pub const TT_MINUS_TAI_SECONDS: f64 = 32.184;

/// Which UTC → TT path produced a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMethod {
    LeapSeconds,
    DeltaT,
}

impl ConversionMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeapSeconds => "leap_seconds",
            Self::DeltaT => "delta_t",
        }
    }
}

/// Result of converting a UTC instant to Terrestrial Time.
///
/// `delta_t_seconds` always equals `tt_minus_utc_seconds`; callers that need
/// the pure TT − UT1 approximation must derive it themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TtConversion {
    pub tt_minus_utc_seconds: f64,
    pub delta_t_seconds: f64,
    pub method: ConversionMethod,
    pub leap_second_table: LeapSecondTableInfo,
}

/// Decimal year of a UTC instant, as the elapsed fraction of its year.
pub fn decimal_year(utc: &DateTime<Utc>) -> f64 {
    let year = utc.year();
    let jd = jd_from_utc(utc);
    let start = crate::julian::calendar_to_jd(year, 1, 1.0);
    let end = crate::julian::calendar_to_jd(year + 1, 1, 1.0);
    f64::from(year) + (jd - start) / (end - start)
}

/// Convert a UTC instant to TT, routing by the 1972 leap-second epoch.
pub fn convert_utc_to_tt(utc: &DateTime<Utc>) -> Result<TtConversion, TimeError> {
    match route_time_conversion(utc) {
        TimeConversionRoute::Post1972LeapSeconds => {
            let tai_minus_utc = f64::from(leap_second_offset(utc));
            let tt_minus_utc = tai_minus_utc + TT_MINUS_TAI_SECONDS;
            Ok(TtConversion {
                tt_minus_utc_seconds: tt_minus_utc,
                delta_t_seconds: tt_minus_utc,
                method: ConversionMethod::LeapSeconds,
                leap_second_table: LEAP_SECOND_TABLE_INFO,
            })
        }
        TimeConversionRoute::Pre1972DeltaT => {
            let dt = delta_t_seconds(decimal_year(utc))?;
            Ok(TtConversion {
                tt_minus_utc_seconds: dt,
                delta_t_seconds: dt,
                method: ConversionMethod::DeltaT,
                leap_second_table: LEAP_SECOND_TABLE_INFO,
            })
        }
    }
}
