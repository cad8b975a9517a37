//! Common error infrastructure for gear-core.
//!
//! In normal operation the engine raises no errors at all: formulas degrade
//! to NaN (and `Option::None` at the public seams) when an attribute or
//! modifier does not apply to the job, and callers treat that as "metric
//! unavailable". The only real failure class is a reference-data lookup miss,
//! which indicates corrupted or incomplete reference tables upstream.

use crate::schema::{Job, SlotId};
use crate::stats::Attribute;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Fatal error - reference data is incomplete, computation cannot proceed.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all gear-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity based on whether the computation can continue.
pub trait GearError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised when a reference-data lookup misses.
///
/// All variants are fatal: a missing job schema or cap curve means the
/// reference tables are inconsistent with the build being evaluated, and
/// silently defaulting would produce wrong numbers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataError {
    /// No schema exists for the requested job.
    #[error("no schema for job {0}")]
    UnknownJob(Job),

    /// No level bracket exists for the requested character level.
    #[error("no level bracket for level {0}")]
    UnknownLevelBracket(u8),

    /// The level cap curve has no entry for an attribute at an item level.
    #[error("no level cap curve for {attribute} at item level {item_level}")]
    MissingLevelCurve {
        attribute: Attribute,
        item_level: u16,
    },

    /// The slot cap curve has no entry for an attribute in a slot.
    #[error("no slot cap curve for {attribute} in slot {slot:?}")]
    MissingSlotCurve { attribute: Attribute, slot: SlotId },
}

impl GearError for DataError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use DataError::*;
        match self {
            UnknownJob(_) => "DATA_UNKNOWN_JOB",
            UnknownLevelBracket(_) => "DATA_UNKNOWN_LEVEL_BRACKET",
            MissingLevelCurve { .. } => "DATA_MISSING_LEVEL_CURVE",
            MissingSlotCurve { .. } => "DATA_MISSING_SLOT_CURVE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_errors_are_fatal() {
        let err = DataError::UnknownJob(Job::Paladin);
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "DATA_UNKNOWN_JOB");
        assert_eq!(err.to_string(), "no schema for job paladin");
    }
}
