//! Deterministic gear-build derivation engine.
//!
//! `gear-core` computes derived character-build statistics for an equipment
//! simulator: aggregated attributes, closed-form combat metrics, stat tier
//! breakpoints, and the probabilistic materia cost of a melding plan. All
//! computation is pure and synchronous; reference data (level brackets, job
//! schemas, cap curves, materia tables) is supplied by oracle implementations,
//! and the caller decides when inputs changed and a derivation must be rerun.
pub mod combat;
pub mod env;
pub mod error;
pub mod item;
pub mod materia;
pub mod schema;
pub mod stats;

pub use combat::{CombatEffects, TierWindow, combat_effects, stat_tiers};
pub use env::{CapCurveOracle, DataOracle};
pub use error::{DataError, ErrorSeverity, GearError};
pub use item::{EquippedItem, EquippedKind};
pub use materia::{
    ConsumptionBucket, ConsumptionReport, MateriaAssignment, MateriaGrade, consumption,
};
pub use schema::{Clan, Job, JobModifiers, JobSchema, LevelBracket, Role, SlotId, SlotSchema};
pub use stats::{
    Attribute, AttributeSet, Baseline, StatCapTable, StatCaps, base_stats, equipped_level,
    equipped_stats, equipped_stats_without_food,
};
