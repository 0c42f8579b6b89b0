//! Per-prospect career-outcome resolution.
//!
//! Combines round-indexed base rates, position multipliers, and a chain of
//! scouting/medical/character/school/combine modifiers into three outcome
//! weights, then draws the result with an injected generator.

pub mod model;
pub mod tables;

pub use model::{OutcomeProbabilityModel, OutcomeWeights};
