//! Validated synthesis-output module records.
//!
//! The synthesis toolchain (yosys) emits a JSON document describing each
//! module's boundary ports, cell instances, and named nets, all referencing
//! a shared global bit-index space. This crate deserializes that document
//! into typed records, normalizes synthesis-native binary-string parameters
//! to integers, and resolves each cell's raw type tag into the closed
//! [`CellKind`] union consumed by the graph builder.
//!
//! Map fields preserve the document's declared order ([`indexmap`]), which
//! downstream consumers rely on for reproducible iteration.

#![warn(missing_docs)]

pub mod error;
pub mod normalize;
pub mod types;

pub use error::NetlistError;
pub use types::{
    Cell, CellKind, Design, Module, ModulePort, NetBit, NetName, ParamValue, PortDirection,
};
