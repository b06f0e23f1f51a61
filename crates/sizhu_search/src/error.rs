//! Error types for solar-term search.
//!
//! Numerical failures keep the target longitude and seed JD so a regression
//! fixture can reproduce them.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from bracketing or root refinement.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// No sign change of the longitude residual within the scan window.
    BracketingFailed {
        target_longitude_deg: f64,
        seed_jd_tt: f64,
        scan_span_days: f64,
    },
    /// Interval endpoints do not bracket a root.
    RootNotBracketed,
    /// Brent iteration exhausted its budget without reaching tolerance.
    IterationLimit { max_iter: u32 },
    /// Solar-term refinement did not converge for this target and seed.
    BrentDidNotConverge {
        target_longitude_deg: f64,
        seed_jd_tt: f64,
    },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BracketingFailed {
                target_longitude_deg,
                seed_jd_tt,
                scan_span_days,
            } => write!(
                f,
                "could not bracket solar longitude {target_longitude_deg} within \
                 +-{scan_span_days} days of seed JD {seed_jd_tt}"
            ),
            Self::RootNotBracketed => write!(f, "root is not bracketed"),
            Self::IterationLimit { max_iter } => {
                write!(f, "Brent solver did not converge within {max_iter} iterations")
            }
            Self::BrentDidNotConverge {
                target_longitude_deg,
                seed_jd_tt,
            } => write!(
                f,
                "Brent solver did not converge for longitude {target_longitude_deg} \
                 seeded at JD {seed_jd_tt}"
            ),
        }
    }
}

impl Error for SearchError {}
