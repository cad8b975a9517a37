//! Reference data for the gear derivation engine.
//!
//! This crate houses the static tables `gear-core` derives from and the
//! loaders for external curve files:
//! - level-bracket constants and racial clan adjustments
//! - the 29-job schema catalog
//! - materia potency, required-level, and overmeld success tables
//! - stat-cap scaling curves (built-in table plus a RON loader)
//!
//! [`StaticData`] and [`CapCurves`] implement the oracle traits the engine
//! consumes; content never holds derived state.

pub mod curves;
pub mod data;
pub mod jobs;
pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use curves::CapCurves;
pub use data::StaticData;

#[cfg(feature = "loaders")]
pub use loaders::CurveLoader;
