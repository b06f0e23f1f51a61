//! The three convention switches governing pillar derivation.
//!
//! Chinese metaphysics schools disagree on how the zi double-hour splits the
//! day, and on whether hour and day boundaries follow the civil clock or true
//! solar time. The engine does not pick a side; every combination of the
//! three axes below is computed deterministically.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// How the 23:00-01:00 zi double-hour assigns the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiConvention {
    /// The day changes at midnight; 23:00-24:00 belongs to the ending day.
    SplitMidnight,
    /// The whole zi hour belongs to the following day; 23:00 rolls the date.
    #[serde(rename = "whole_zi_23")]
    WholeZi23,
}

/// Which clock the hour pillar reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourBasis {
    /// True solar time at the birth meridian.
    TrueSolar,
    /// Local civil wall-clock time.
    Civil,
}

/// Which clock decides the calendar date of the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundaryBasis {
    /// True solar time at the birth meridian.
    TrueSolar,
    /// Local civil wall-clock time.
    Civil,
}

impl ZiConvention {
    /// Canonical identifier used in serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SplitMidnight => "split_midnight",
            Self::WholeZi23 => "whole_zi_23",
        }
    }

    /// The other zi convention, used for ambiguity alternatives.
    pub const fn opposite(self) -> Self {
        match self {
            Self::SplitMidnight => Self::WholeZi23,
            Self::WholeZi23 => Self::SplitMidnight,
        }
    }
}

impl HourBasis {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrueSolar => "true_solar",
            Self::Civil => "civil",
        }
    }
}

impl DayBoundaryBasis {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrueSolar => "true_solar",
            Self::Civil => "civil",
        }
    }
}

impl FromStr for ZiConvention {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split_midnight" => Ok(Self::SplitMidnight),
            "whole_zi_23" => Ok(Self::WholeZi23),
            _ => Err(BaseError::InvalidConvention("zi_convention")),
        }
    }
}

impl FromStr for HourBasis {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true_solar" => Ok(Self::TrueSolar),
            "civil" => Ok(Self::Civil),
            _ => Err(BaseError::InvalidConvention("hour_basis")),
        }
    }
}

impl FromStr for DayBoundaryBasis {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true_solar" => Ok(Self::TrueSolar),
            "civil" => Ok(Self::Civil),
            _ => Err(BaseError::InvalidConvention("day_boundary_basis")),
        }
    }
}

/// One validated combination of the three convention axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConventionSettings {
    pub zi_convention: ZiConvention,
    pub hour_basis: HourBasis,
    pub day_boundary_basis: DayBoundaryBasis,
}

impl Default for ConventionSettings {
    fn default() -> Self {
        Self {
            zi_convention: ZiConvention::SplitMidnight,
            hour_basis: HourBasis::TrueSolar,
            day_boundary_basis: DayBoundaryBasis::TrueSolar,
        }
    }
}

impl ConventionSettings {
    /// Same settings with the zi convention flipped.
    ///
    /// Used to compute alternative day/hour pillars when the birth falls in
    /// the zi window.
    pub const fn with_opposite_zi(self) -> Self {
        Self {
            zi_convention: self.zi_convention.opposite(),
            hour_basis: self.hour_basis,
            day_boundary_basis: self.day_boundary_basis,
        }
    }
}

/// All 2x2x2 supported convention combinations.
pub fn all_convention_combinations() -> Vec<ConventionSettings> {
    let mut combinations = Vec::with_capacity(8);
    for zi_convention in [ZiConvention::SplitMidnight, ZiConvention::WholeZi23] {
        for hour_basis in [HourBasis::TrueSolar, HourBasis::Civil] {
            for day_boundary_basis in [DayBoundaryBasis::TrueSolar, DayBoundaryBasis::Civil] {
                combinations.push(ConventionSettings {
                    zi_convention,
                    hour_basis,
                    day_boundary_basis,
                });
            }
        }
    }
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let c = ConventionSettings::default();
        assert_eq!(c.zi_convention, ZiConvention::SplitMidnight);
        assert_eq!(c.hour_basis, HourBasis::TrueSolar);
        assert_eq!(c.day_boundary_basis, DayBoundaryBasis::TrueSolar);
    }

    #[test]
    fn eight_combinations() {
        let all = all_convention_combinations();
        assert_eq!(all.len(), 8);
        // All distinct.
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn opposite_zi_is_involution() {
        let c = ConventionSettings::default();
        assert_eq!(c.with_opposite_zi().with_opposite_zi(), c);
        assert_ne!(c.with_opposite_zi().zi_convention, c.zi_convention);
    }

    #[test]
    fn parse_round_trip() {
        for zi in [ZiConvention::SplitMidnight, ZiConvention::WholeZi23] {
            assert_eq!(zi.as_str().parse::<ZiConvention>().unwrap(), zi);
        }
        for basis in [HourBasis::TrueSolar, HourBasis::Civil] {
            assert_eq!(basis.as_str().parse::<HourBasis>().unwrap(), basis);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("midnightish".parse::<ZiConvention>().is_err());
        assert!("sidereal".parse::<HourBasis>().is_err());
        assert!("".parse::<DayBoundaryBasis>().is_err());
    }
}
