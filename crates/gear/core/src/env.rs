//! Traits describing read-only reference data.
//!
//! Oracles expose the static tables the engine derives from: level brackets,
//! job schemas, clan adjustments, materia tables, and stat-cap curves. The
//! engine never owns this data; concrete implementations live in the content
//! crate (or in test fixtures) and are passed in by reference.

use crate::error::DataError;
use crate::materia::MateriaGrade;
use crate::schema::{Clan, Job, JobSchema, LevelBracket, Role, SlotId};
use crate::stats::Attribute;

/// Oracle providing level brackets, job schemas, and materia tables.
pub trait DataOracle: Send + Sync {
    /// Constants for a character-level bracket (50/60/70/80 in the reference
    /// tables).
    fn level_bracket(&self, job_level: u8) -> Option<LevelBracket>;

    /// Schema for a job, or `None` when the tables do not know it.
    fn job_schema(&self, job: Job) -> Option<&JobSchema>;

    /// Racial attribute adjustment for a clan (0 when the attribute has no
    /// clan row).
    fn clan_adjustment(&self, attribute: Attribute, clan: Clan) -> i32;

    /// Points a materia of this attribute and grade grants.
    fn materia_potency(&self, attribute: Attribute, grade: MateriaGrade) -> Option<i32>;

    /// Success percentage for melding a grade into the given overmeld
    /// position (0 = first slot past the guaranteed ones). Guaranteed slots
    /// are 100 by definition and not part of this table.
    fn meld_success_rate(&self, grade: MateriaGrade, overmeld_index: u8) -> Option<u8>;

    /// Like [`DataOracle::level_bracket`], failing fatally on a miss.
    fn require_level_bracket(&self, job_level: u8) -> Result<LevelBracket, DataError> {
        self.level_bracket(job_level)
            .ok_or(DataError::UnknownLevelBracket(job_level))
    }

    /// Like [`DataOracle::job_schema`], failing fatally on a miss.
    fn require_job_schema(&self, job: Job) -> Result<&JobSchema, DataError> {
        self.job_schema(job).ok_or(DataError::UnknownJob(job))
    }
}

/// Oracle providing the scaling curves behind per-slot stat caps.
///
/// A cap is `round(level * slot * role / 10_000)`; `role_factor` returning
/// `None` means the attribute has no role-specific curve and 100 is used.
pub trait CapCurveOracle: Send + Sync {
    fn level_factor(&self, attribute: Attribute, item_level: u16) -> Option<u32>;
    fn slot_factor(&self, attribute: Attribute, slot: SlotId) -> Option<u32>;
    fn role_factor(&self, attribute: Attribute, role: Role) -> Option<u32>;
}
