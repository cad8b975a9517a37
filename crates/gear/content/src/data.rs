//! The built-in [`DataOracle`] implementation.

use std::collections::BTreeMap;

use gear_core::{Attribute, Clan, DataOracle, Job, JobSchema, LevelBracket, MateriaGrade};

use crate::{jobs, tables};

/// Reference tables compiled into the crate, exposed through the engine's
/// oracle trait.
pub struct StaticData {
    schemas: BTreeMap<Job, JobSchema>,
}

impl StaticData {
    pub fn new() -> Self {
        Self {
            schemas: jobs::catalog()
                .into_iter()
                .map(|schema| (schema.job, schema))
                .collect(),
        }
    }

    /// Iterates over every known job schema.
    pub fn schemas(&self) -> impl Iterator<Item = &JobSchema> {
        self.schemas.values()
    }
}

impl Default for StaticData {
    fn default() -> Self {
        Self::new()
    }
}

impl DataOracle for StaticData {
    fn level_bracket(&self, job_level: u8) -> Option<LevelBracket> {
        tables::level_bracket(job_level)
    }

    fn job_schema(&self, job: Job) -> Option<&JobSchema> {
        self.schemas.get(&job)
    }

    fn clan_adjustment(&self, attribute: Attribute, clan: Clan) -> i32 {
        tables::clan_adjustment(attribute, clan)
    }

    fn materia_potency(&self, attribute: Attribute, grade: MateriaGrade) -> Option<i32> {
        tables::materia_potency(attribute, grade)
    }

    fn meld_success_rate(&self, grade: MateriaGrade, overmeld_index: u8) -> Option<u8> {
        tables::meld_success_rate(grade, overmeld_index)
    }
}
