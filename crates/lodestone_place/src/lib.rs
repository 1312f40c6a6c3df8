//! Simulated-annealing placement engine.
//!
//! Given an immutable [`Circuit`](lodestone_graph::Circuit), the engine
//! assigns every component a non-overlapping integer grid position while
//! minimizing total wiring distance, and returns a [`LayoutResult`] with the
//! best layout found, its energy, and periodic snapshots for progressive
//! replay.
//!
//! The energy model is two-stage lexicographic: any layout free of
//! bounding-box overlaps (`WireLength` stage) outranks every overlapping
//! layout (`Overlap` stage) regardless of numeric values; within a stage,
//! lower is better.

#![warn(missing_docs)]

pub mod anneal;
pub mod energy;
pub mod error;
pub mod layout;

pub use anneal::{anneal, AnnealOptions};
pub use energy::{Energy, EnergyModel, EnergyStage, STAGE_PENALTY};
pub use error::PlaceError;
pub use layout::{Layout, LayoutResult};
