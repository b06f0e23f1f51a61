//! Unified error type for the engine pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_base::BaseError;
use sizhu_search::SearchError;
use sizhu_time::TimeError;

/// Errors surfaced by the engine boundary.
#[derive(Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// Convention, policy, or pillar validation failure.
    Base(BaseError),
    /// Civil time resolution or time-scale conversion failure.
    Time(TimeError),
    /// Solar-term search failure.
    Search(SearchError),
    /// Local mode requires date, time, and timezone fields.
    MissingLocalFields,
    /// Latitude outside [-90, 90].
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180].
    InvalidLongitude(f64),
    /// Local date/time fields do not form a valid civil datetime.
    InvalidCivilDate(String),
    /// UTC timestamp failed to parse as ISO-8601 with an offset.
    InvalidUtcTimestamp(String),
    /// Payload serialization failure.
    Serialize(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::MissingLocalFields => write!(
                f,
                "local time mode requires date, time, and timezone fields"
            ),
            Self::InvalidLatitude(lat) => {
                write!(f, "latitude {lat} outside [-90, 90]")
            }
            Self::InvalidLongitude(lon) => {
                write!(f, "longitude {lon} outside [-180, 180]")
            }
            Self::InvalidCivilDate(msg) => write!(f, "invalid civil datetime: {msg}"),
            Self::InvalidUtcTimestamp(msg) => {
                write!(f, "utc_timestamp must be ISO-8601 with an offset: {msg}")
            }
            Self::Serialize(msg) => write!(f, "payload serialization failed: {msg}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BaseError> for EngineError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<SearchError> for EngineError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}
