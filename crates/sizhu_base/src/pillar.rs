//! Heavenly stems, earthly branches, and the validated `Pillar` pair.

use serde::Serialize;

use crate::error::BaseError;

/// The 10 heavenly stems, in cycle order.
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The 12 earthly branches, in cycle order.
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// A (stem, branch) pair.
///
/// Stems and branches alternate yang/yin with their index parity, and only
/// same-parity pairs occur in the sexagenary cycle. Construction checks that
/// parity; a violation means the caller's arithmetic is wrong, not the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    stem_idx: u8,
    branch_idx: u8,
}

impl Pillar {
    /// Build a pillar, enforcing the polarity invariant.
    pub fn new(stem_idx: u8, branch_idx: u8) -> Result<Self, BaseError> {
        if stem_idx >= 10 || branch_idx >= 12 || stem_idx % 2 != branch_idx % 2 {
            return Err(BaseError::PolarityViolation {
                stem_idx,
                branch_idx,
            });
        }
        Ok(Self {
            stem_idx,
            branch_idx,
        })
    }

    /// Stem index in 0..10.
    pub const fn stem_idx(self) -> u8 {
        self.stem_idx
    }

    /// Branch index in 0..12.
    pub const fn branch_idx(self) -> u8 {
        self.branch_idx
    }

    /// Stem character, e.g. "甲".
    pub fn stem_char(self) -> &'static str {
        STEMS[self.stem_idx as usize]
    }

    /// Branch character, e.g. "子".
    pub fn branch_char(self) -> &'static str {
        BRANCHES[self.branch_idx as usize]
    }

    /// Two-character name, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem_char(), self.branch_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(STEMS.len(), 10);
        assert_eq!(BRANCHES.len(), 12);
    }

    #[test]
    fn valid_pairs_accepted() {
        assert!(Pillar::new(0, 0).is_ok());
        assert!(Pillar::new(9, 11).is_ok());
        assert!(Pillar::new(3, 3).is_ok());
    }

    #[test]
    fn parity_mismatch_rejected() {
        assert!(matches!(
            Pillar::new(0, 1),
            Err(BaseError::PolarityViolation { .. })
        ));
        assert!(Pillar::new(1, 0).is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(Pillar::new(10, 0).is_err());
        assert!(Pillar::new(0, 12).is_err());
    }

    #[test]
    fn jiazi_name() {
        let p = Pillar::new(0, 0).unwrap();
        assert_eq!(p.name(), "甲子");
        assert_eq!(p.stem_char(), "甲");
        assert_eq!(p.branch_char(), "子");
    }
}
