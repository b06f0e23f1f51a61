//! Error types for convention, policy, and pillar validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from convention parsing, policy checks, or pillar construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// Convention string does not name a supported setting.
    InvalidConvention(&'static str),
    /// Input year is outside the supported [1949, 2100] range.
    YearOutOfRange(i32),
    /// Input calendar is not Gregorian.
    NonGregorianInput(String),
    /// Request asked for a capability outside the engine scope.
    UnsupportedScope(&'static str),
    /// Stem and branch parity disagree; this indicates a computation bug.
    PolarityViolation { stem_idx: u8, branch_idx: u8 },
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConvention(axis) => write!(f, "invalid convention value for {axis}"),
            Self::YearOutOfRange(year) => {
                write!(f, "year {year} outside supported range (1949-2100)")
            }
            Self::NonGregorianInput(calendar) => {
                write!(f, "only Gregorian calendar input is supported, got {calendar}")
            }
            Self::UnsupportedScope(what) => write!(f, "{what} is out of scope"),
            Self::PolarityViolation {
                stem_idx,
                branch_idx,
            } => write!(
                f,
                "polarity violation: stem={stem_idx}, branch={branch_idx}"
            ),
        }
    }
}

impl Error for BaseError {}
