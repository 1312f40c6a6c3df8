//! The placement graph model and the netlist graph builder.
//!
//! This crate converts a validated hardware module (from
//! [`lodestone_netlist`]) into an abstract [`Circuit`]: sized, ported
//! components plus directed connections between ports. The conversion relies
//! on a [`CellRegistry`] that maps each supported cell kind to a physical
//! footprint (bounding size + tagged port locations); the builder never
//! inspects voxel content.
//!
//! # Pipeline
//!
//! 1. **Pseudo components** — one `input` and one `output` boundary node
//! 2. **Cells** — footprint lookup, tag-to-port resolution
//! 3. **Constants** — `"0"`/`"1"` literals become single-port source nodes
//! 4. **Nets** — per bit, every driver is wired to every receiver

#![warn(missing_docs)]

pub mod build;
pub mod data;
pub mod error;
pub mod ids;
pub mod render;

pub use build::{build_circuit, INPUT_PSEUDO, IO_PORT, OUTPUT_PSEUDO};
pub use data::{Circuit, Component, Connection, PortRef};
pub use error::GraphError;
pub use ids::ComponentId;
pub use render::{AdderFootprint, CellFootprint, CellRegistry, CellSpec, SdffFootprint};
