//! Materia melds and their consumption model.

pub mod consumption;

pub use consumption::{ConsumptionBucket, ConsumptionReport, consumption};

use crate::stats::Attribute;

/// A materia grade, 1 (I) through 8 (VIII).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MateriaGrade(u8);

impl MateriaGrade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Validates a raw grade number.
    pub const fn new(grade: u8) -> Option<Self> {
        if grade >= Self::MIN && grade <= Self::MAX {
            Some(Self(grade))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into grade-keyed tables.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

/// One materia melded into an item slot.
///
/// `success_rate` is a percentage in `(0, 100]`, resolved upstream from the
/// overmeld table when the assignment is made (normal slots are always 100,
/// overmeld slots depend on grade and slot position).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MateriaAssignment {
    pub attribute: Attribute,
    pub grade: MateriaGrade,
    pub success_rate: u8,
}

impl MateriaAssignment {
    pub const fn new(attribute: Attribute, grade: MateriaGrade, success_rate: u8) -> Self {
        Self {
            attribute,
            grade,
            success_rate,
        }
    }

    /// True for a meld that can never fail.
    pub const fn is_safe(self) -> bool {
        self.success_rate == 100
    }
}
