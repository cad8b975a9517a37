//! Combat performance derivation.
//!
//! Pure functions from aggregated attributes to closed-form performance
//! numbers and to the tier windows around them. Both return `None` for jobs
//! without combat modifiers (crafters and gatherers); inside a combat job,
//! an individual metric touching an inapplicable attribute degrades to NaN
//! (or is omitted from the tier map) rather than erroring.

pub mod effects;
pub mod tiers;

pub use effects::{CombatEffects, combat_effects};
pub use tiers::{TierWindow, calc_gcd_tier, calc_tier, stat_tiers};
