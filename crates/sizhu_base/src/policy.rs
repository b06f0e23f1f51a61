//! Engine scope policy.
//!
//! The astronomical tables embedded in the engine are fitted for the modern
//! era; the policy bounds input to 1949-2100 and Gregorian dates, and routes
//! UTC -> TT conversion by the 1972 leap-second epoch.

use chrono::{DateTime, Datelike, Utc};

use crate::error::BaseError;

/// Earliest supported civil year.
pub const MIN_SUPPORTED_YEAR: i32 = 1949;

/// Latest supported civil year.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

/// Which UTC -> TT path applies to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeConversionRoute {
    /// On or after 1972-01-01T00:00:00Z: TAI-UTC leap-second table + 32.184 s.
    Post1972LeapSeconds,
    /// Before 1972: polynomial delta-T approximation.
    Pre1972DeltaT,
}

/// Scope limits enforced before any astronomical computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnginePolicy {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            min_year: MIN_SUPPORTED_YEAR,
            max_year: MAX_SUPPORTED_YEAR,
        }
    }
}

impl EnginePolicy {
    /// Reject years outside the supported range.
    pub fn validate_year(&self, year: i32) -> Result<(), BaseError> {
        if year < self.min_year || year > self.max_year {
            return Err(BaseError::YearOutOfRange(year));
        }
        Ok(())
    }

    /// Reject non-Gregorian calendar identifiers.
    pub fn validate_calendar(&self, calendar: &str) -> Result<(), BaseError> {
        if calendar != "gregorian" {
            return Err(BaseError::NonGregorianInput(calendar.to_string()));
        }
        Ok(())
    }

    /// Reject requests for interpretive output layers.
    pub fn validate_output_scope(&self, include_interpretive_layers: bool) -> Result<(), BaseError> {
        if include_interpretive_layers {
            return Err(BaseError::UnsupportedScope("interpretive layers"));
        }
        Ok(())
    }
}

/// Route a UTC instant to its TT conversion method.
///
/// The split is 1972-01-01T00:00:00Z, inclusive on the leap-second side.
pub fn route_time_conversion(utc: &DateTime<Utc>) -> TimeConversionRoute {
    if utc.year() >= 1972 {
        TimeConversionRoute::Post1972LeapSeconds
    } else {
        TimeConversionRoute::Pre1972DeltaT
    }
}
