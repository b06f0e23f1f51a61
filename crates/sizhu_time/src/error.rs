//! Error types for civil time resolution and time-scale conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from wall-clock resolution or UTC → TT conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Timezone name is not in the IANA database.
    UnknownTimezone(String),
    /// Wall time occurs twice (DST fall-back) and no fold was given.
    AmbiguousTime,
    /// Wall time does not exist (DST spring-forward gap).
    NonexistentTime,
    /// Fold disambiguator outside {0, 1}.
    InvalidFold(u8),
    /// Decimal year outside the Delta-T polynomial domain [1941, 2150).
    DeltaTOutOfRange { decimal_year: f64 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTimezone(name) => write!(f, "unknown IANA timezone: {name}"),
            Self::AmbiguousTime => write!(
                f,
                "local time is ambiguous due to DST fall-back; \
                 specify fold=0 (first occurrence) or fold=1 (second)"
            ),
            Self::NonexistentTime => write!(
                f,
                "local time does not exist due to a DST transition; \
                 provide a UTC timestamp directly"
            ),
            Self::InvalidFold(fold) => write!(f, "fold must be 0 or 1, got {fold}"),
            Self::DeltaTOutOfRange { decimal_year } => write!(
                f,
                "decimal year {decimal_year} outside supported delta-T segments [1941, 2150)"
            ),
        }
    }
}

impl Error for TimeError {}
