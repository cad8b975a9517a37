//! Attribute aggregation.
//!
//! ```text
//! [ Job baselines + clan adjustments ]   (base_stats)
//!      ↓
//! [ + equipped item stats ]              (equipped_stats_without_food)
//!      ↓
//! [ + food effective stats ]             (equipped_stats)
//!      ↓
//! [ Combat metrics / tier windows ]      (crate::combat)
//! ```
//!
//! Item stats arrive pre-capped: the build collaborator clamps them against
//! [`StatCapTable`] at equip time, so aggregation is a plain sum.

pub mod aggregate;
pub mod attribute;
pub mod caps;

pub use aggregate::{base_stats, equipped_level, equipped_stats, equipped_stats_without_food};
pub use attribute::{Attribute, AttributeSet, Baseline, StatCaps};
pub use caps::{CapKey, StatCapTable};
